//! Miette diagnostic conversion for CLI errors.

use crate::error::CliError;
use miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        // The core error carries its own code and help text
        CliError::Sizing(e) => Report::new(e),
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        CliError::Command(e) => miette::miette!(code = "COMMAND_FAILURE", "{}", e),
        _ => miette::miette!("{}", err),
    }
}
