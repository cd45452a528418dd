//! Command implementations for the pagesize CLI.
//!
//! - [`run`] - install, build, then size every page
//! - [`size`] - size the pages of an existing build
//!
//! Each command provides an `execute` function that takes the parsed command
//! arguments and returns a Result.

pub mod run;
pub mod size;
pub(crate) mod utils;

// Re-export execute functions for convenience
pub use run::execute as run_execute;
pub use size::execute as size_execute;
