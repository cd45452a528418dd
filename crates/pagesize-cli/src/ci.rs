//! CI platform bindings.
//!
//! GitHub Actions reads step outputs from the file named by `GITHUB_OUTPUT`
//! and masks any value announced with an `::add-mask::` workflow command.
//! Outside Actions both degrade to log lines.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Output name of the build completion signal.
pub const STATUS_OUTPUT: &str = "status";

/// Value of [`STATUS_OUTPUT`] once the build finished.
pub const BUILD_COMPLETE: &str = "build-complete";

/// Check if running inside a GitHub Actions job.
pub fn is_github_actions() -> bool {
    std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true")
}

fn output_file() -> Option<PathBuf> {
    std::env::var_os("GITHUB_OUTPUT")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Publish a step output.
///
/// Appends `name=value` to `$GITHUB_OUTPUT` when set, otherwise logs it.
pub fn set_output(name: &str, value: &str) -> io::Result<()> {
    match output_file() {
        Some(path) => append_output(&path, name, value),
        None => {
            info!("{}: {}", name, value);
            Ok(())
        }
    }
}

/// Append one output record to an Actions output file.
///
/// Multi-line values use the heredoc form Actions expects.
pub fn append_output(path: &Path, name: &str, value: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    if value.contains('\n') {
        let delimiter = format!("pagesize_{}_eof", name);
        writeln!(file, "{name}<<{delimiter}\n{value}\n{delimiter}")?;
    } else {
        writeln!(file, "{name}={value}")?;
    }
    debug!("Wrote output '{}' to {}", name, path.display());
    Ok(())
}

/// Ask the runner to redact `secret` from the job log.
pub fn mask_secret(secret: &str) {
    if is_github_actions() && !secret.is_empty() {
        println!("::add-mask::{}", secret);
    }
}
