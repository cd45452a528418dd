//! Size command implementation.
//!
//! Reads the manifests of an existing build and reports the raw and gzipped
//! weight of every page. Also the final step of `pagesize run`.

use crate::ci;
use crate::cli::SizeArgs;
use crate::commands::utils;
use crate::config::{ConfigOverrides, PagesizeConfig};
use crate::error::{CliError, Result};
use crate::ui;
use pagesize_core::{size_pages, Manifests, SizeReport};
use std::path::Path;
use std::time::Instant;
use tracing::debug;

/// Output carrying the plain-text summary table.
pub const SUMMARY_OUTPUT: &str = "summary";

/// Execute the size command.
///
/// # Errors
///
/// Returns errors for invalid configuration, missing manifests, and pages
/// whose assets could not be sized.
pub async fn execute(args: SizeArgs) -> Result<()> {
    let config = PagesizeConfig::load(&ConfigOverrides::from(&args), args.sizing.config.as_deref())?;
    config.validate()?;

    let cwd = utils::get_cwd()?;
    let workspace = config.resolve_workspace(&cwd)?;

    size_build(&config, &workspace).await?;
    Ok(())
}

/// Size every page of the build under `workspace`.
///
/// Every page is sized before this returns, even when some fail. The summary
/// and the optional JSON report cover the pages that succeeded; if any page
/// failed, [`CliError::PagesFailed`] is returned afterwards. A relative
/// `report_path` is resolved against `workspace`.
pub async fn size_build(config: &PagesizeConfig, workspace: &Path) -> Result<SizeReport> {
    let start_time = Instant::now();
    let build_dir = config.build_dir(workspace);

    ui::info(&format!("Loading build manifests from {}", build_dir.display()));
    let manifests = Manifests::load(&build_dir, config.serverless)?;

    let plan = manifests.plan();
    let total = plan.len();
    ui::info(&format!("Checking file sizes of {} pages...", total));

    let outcomes = size_pages(&build_dir, plan).await;

    let mut pages = Vec::with_capacity(total);
    let mut failed = 0;
    for outcome in outcomes {
        match outcome {
            Ok(page) => pages.push(page),
            // Already logged by the page task
            Err(err) => {
                debug!("Page failed: {:?}", err);
                failed += 1;
            }
        }
    }

    let report = SizeReport::new(pages);
    ui::print_size_summary(&report);

    if let Some(report_path) = &config.report_path {
        let path = utils::resolve_path(report_path, workspace);
        utils::write_report(&report, &path)?;
        ui::info(&format!("Wrote size report to {}", path.display()));
    }

    ci::set_output(SUMMARY_OUTPUT, &ui::summary_lines(&report).join("\n"))?;

    if failed > 0 {
        ui::warning(&format!(
            "{} of {} pages are missing from the summary",
            failed, total
        ));
        return Err(CliError::PagesFailed { failed, total });
    }

    ui::success(&format!(
        "Sized {} pages in {:.2}s",
        total,
        start_time.elapsed().as_secs_f64()
    ));
    Ok(report)
}
