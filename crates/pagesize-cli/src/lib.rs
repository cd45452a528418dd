//! pagesize CLI - build a Next.js app in CI and report per-page bundle sizes.
//!
//! This crate wires the sizing pipeline from `pagesize-core` into a command
//! line tool meant to run as a single pipeline step.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions
//! - [`config`] - layered configuration (defaults, file, env, Actions inputs, flags)
//! - [`runner`] - install/build shell command execution
//! - [`commands`] - `run` and `size` implementations
//! - [`ci`] - CI platform bindings (step outputs, secret masking)
//! - [`error`] - error types with actionable messages
//! - [`logger`] - structured logging with tracing
//! - [`ui`] - terminal output helpers and the size summary table
//!
//! # Example
//!
//! ```rust,no_run
//! use pagesize_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     // CLI command implementations...
//!     Ok(())
//! }
//! ```

pub mod ci;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod runner;
pub mod ui;

// Re-export commonly used types
pub use error::{CliError, CommandError, ConfigError, Result, ResultExt};
