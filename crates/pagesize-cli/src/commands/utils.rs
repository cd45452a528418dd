//! Shared utilities for command implementations.

use crate::error::{CliError, Result, ResultExt};
use pagesize_core::SizeReport;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve a path relative to a base directory.
///
/// If the path is absolute, returns it unchanged. Otherwise, joins it with
/// `base`.
pub fn resolve_path(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Get the current working directory.
pub fn get_cwd() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| {
        CliError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to get current directory: {}", e),
        ))
    })
}

/// Write the size report as pretty JSON, creating parent directories.
pub fn write_report(report: &SizeReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_path(parent)
            .with_hint("Check that report_path points into a writable directory")?;
    }

    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json + "\n")
        .with_path(path)
        .context(format!("Failed to write size report to {}", path.display()))
}
