//! Run command implementation.
//!
//! Installs dependencies, builds the project, signals build completion to the
//! CI platform, then sizes every page of the fresh build.

use crate::ci::{self, BUILD_COMPLETE, STATUS_OUTPUT};
use crate::cli::RunArgs;
use crate::commands::{size, utils};
use crate::config::{ConfigOverrides, PagesizeConfig};
use crate::error::Result;
use crate::runner::CommandRunner;
use crate::ui;
use pagesize_core::SizeReport;
use std::path::Path;
use std::time::Instant;
use tracing::debug;

/// Execute the run command.
///
/// # Process
///
/// 1. Load and validate configuration (CLI > Actions inputs > Env > File > Defaults)
/// 2. Run the install command, then the build command
/// 3. Optionally list the workspace and build output
/// 4. Publish the build completion status
/// 5. Load manifests and size every page
///
/// # Errors
///
/// Any failing command aborts the run before the next step starts.
pub async fn execute(args: RunArgs) -> Result<()> {
    let start_time = Instant::now();

    let config = PagesizeConfig::load(&ConfigOverrides::from(&args), args.sizing.config.as_deref())?;
    config.validate()?;

    run(&config, &utils::get_cwd()?).await?;

    ui::success(&format!(
        "Finished in {:.2}s",
        start_time.elapsed().as_secs_f64()
    ));
    Ok(())
}

/// Run the whole pipeline for an already loaded configuration.
///
/// `cwd` anchors a relative workspace path.
pub async fn run(config: &PagesizeConfig, cwd: &Path) -> Result<SizeReport> {
    let workspace = config.resolve_workspace(cwd)?;

    if let Some(token) = config.token.as_deref().filter(|t| !t.is_empty()) {
        ci::mask_secret(token);
        debug!("CI token configured");
    }

    let runner = CommandRunner::new(&workspace);

    ui::info("Installing dependencies...");
    runner.run("install", &config.install_command).await?;

    ui::info("Building project...");
    runner.run("build", &config.build_command).await?;

    if config.diagnostics {
        run_diagnostics(&runner, config).await?;
    }

    ci::set_output(STATUS_OUTPUT, BUILD_COMPLETE)?;
    ui::success("Build complete.");

    size::size_build(config, &workspace).await
}

/// List the workspace and the build output so a broken layout is visible in
/// the CI log.
async fn run_diagnostics(runner: &CommandRunner, config: &PagesizeConfig) -> Result<()> {
    let dist = config.dist_path.display().to_string();
    for command in diagnostic_commands(&dist) {
        runner.run("diagnostic", &command).await?;
    }
    Ok(())
}

#[cfg(not(target_os = "windows"))]
fn diagnostic_commands(dist: &str) -> Vec<String> {
    vec![
        "ls -lat".to_string(),
        "pwd".to_string(),
        format!("ls -la \"{}\"", dist),
    ]
}

#[cfg(target_os = "windows")]
fn diagnostic_commands(dist: &str) -> Vec<String> {
    vec!["dir".to_string(), "cd".to_string(), format!("dir \"{}\"", dist)]
}
