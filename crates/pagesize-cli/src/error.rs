//! Error handling for the pagesize CLI.
//!
//! Errors are layered with `thiserror`:
//! - **Top-level errors** (`CliError`) are what commands return
//! - **Domain errors** (`ConfigError`, `CommandError`, `pagesize_core::Error`)
//!   carry the details and convert automatically via `#[from]`
//! - **Context helpers** (`ResultExt`) attach paths and hints
//!
//! Every error is fatal for the run; `main` renders it with miette and exits
//! non-zero.
//!
//! # Example
//!
//! ```rust,no_run
//! use pagesize_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_report(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path).with_path(path)
//! }
//! ```

mod miette;

pub use self::miette::cli_error_to_miette;

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration-related errors (invalid values, missing workspace, etc.)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// An install, build or diagnostic command failed
    #[error(transparent)]
    Command(#[from] CommandError),

    /// Manifest loading or bundle sizing failed
    #[error(transparent)]
    Sizing(#[from] pagesize_core::Error),

    /// One or more pages could not be sized
    #[error("{failed} of {total} pages could not be sized\n\nHint: see the errors logged above for the affected assets")]
    PagesFailed {
        /// Number of failed pages
        failed: usize,
        /// Number of planned pages
        total: usize,
    },

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Explicit config file doesn't exist
    #[error("Config file not found: {}\n\nHint: Create a pagesize.config.json file or drop --config", .0.display())]
    NotFound(PathBuf),

    /// Missing required configuration field
    #[error("Missing required field: {field}\n\nHint: {hint}")]
    MissingField {
        /// Name of the missing field
        field: String,
        /// Helpful hint for providing the field
        hint: String,
    },

    /// Invalid value for a configuration option
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The invalid value
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },
}

/// Shell command errors.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The command string was empty
    #[error("No {step} command configured\n\nHint: Set {step}_command in pagesize.config.json or pass --{step}-command")]
    Empty {
        /// Pipeline step the command belongs to
        step: &'static str,
    },

    /// The shell could not be started
    #[error("Failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The command ran and returned a non-zero status
    #[error("Command `{command}` failed with {status}\n\nHint: Run it locally in the workspace to see the full output")]
    Failed { command: String, status: ExitStatus },
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Add a file path to the error context.
    ///
    /// I/O `NotFound` errors become [`CliError::FileNotFound`].
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Add a helpful hint to the error context.
    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T>;

    /// Prefix the error with a custom message.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            match err {
                CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                    CliError::FileNotFound(path.as_ref().to_path_buf())
                }
                other => other,
            }
        })
    }

    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}\n\nHint: {}", err, hint))
        })
    }

    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}
