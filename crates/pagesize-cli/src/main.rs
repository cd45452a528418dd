//! pagesize CLI - per-page bundle sizes for Next.js builds in CI.
//!
//! This is the main entry point for the pagesize CLI. It handles command-line
//! argument parsing, logging initialization, and command dispatch.

use clap::Parser;
use miette::Result;
use pagesize_cli::{cli, commands, error, logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = cli::Cli::parse();

    // Initialize logging and colors based on global flags
    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Run(run_args) => commands::run_execute(run_args).await,
        cli::Command::Size(size_args) => commands::size_execute(size_args).await,
    };

    // Convert CLI errors to miette diagnostics for error reporting
    result.map_err(error::cli_error_to_miette)
}
