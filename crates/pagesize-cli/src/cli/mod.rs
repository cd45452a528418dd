//! Command-line interface definition for pagesize.
//!
//! # Command Structure
//!
//! - `pagesize run` - install dependencies, build, then size every page
//! - `pagesize size` - size the pages of an existing build output

mod commands;

use clap::Parser;

pub use commands::{Command, RunArgs, SizeArgs, SizingOptions};

/// pagesize - per-page bundle sizes for Next.js builds
#[derive(Parser, Debug)]
#[command(
    name = "pagesize",
    version,
    about = "Report per-page bundle sizes of a Next.js build",
    long_about = "pagesize builds a Next.js application, reads the manifests the build leaves\n\
                  in its output directory and reports the raw and gzipped weight of every page.\n\
                  It is meant to run as a single CI step."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    ///
    /// Outputs plain text without ANSI color codes. Useful when the CI log
    /// viewer does not render colors.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
