use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available pagesize subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Install, build and report page sizes
    ///
    /// Runs the install command, then the build command, in the workspace.
    /// Once both succeed the build manifests are read and every page is sized.
    Run(RunArgs),

    /// Report page sizes of an existing build
    ///
    /// Skips the install and build commands. Fails if the build output has
    /// no manifests yet.
    Size(SizeArgs),
}

/// Options shared by every command that sizes pages.
///
/// Unset options fall back to pagesize.config.json, `PAGESIZE_*` and
/// `INPUT_*` environment variables, then defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct SizingOptions {
    /// Path to a pagesize.config.json file
    ///
    /// Defaults to ./pagesize.config.json when it exists.
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Root of the Next.js project
    #[arg(short = 'w', long, value_name = "DIR")]
    pub workspace: Option<PathBuf>,

    /// Build output directory, relative to the workspace
    #[arg(short = 'd', long, value_name = "DIR")]
    pub dist_path: Option<PathBuf>,

    /// Skip the serverless pages manifest
    ///
    /// For builds that do not use the serverless target and therefore have
    /// no serverless/pages-manifest.json.
    #[arg(long)]
    pub no_serverless: bool,

    /// Write the full size report as JSON to this file
    ///
    /// Relative paths are resolved against the workspace.
    #[arg(short = 'o', long, value_name = "FILE")]
    pub report: Option<PathBuf>,
}

/// Arguments for the run command
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    #[command(flatten)]
    pub sizing: SizingOptions,

    /// Command installing the project's dependencies
    ///
    /// Examples:
    ///   pagesize run --install-command "npm ci"
    ///   pagesize run --install-command "pnpm install --frozen-lockfile"
    #[arg(long, value_name = "CMD")]
    pub install_command: Option<String>,

    /// Command building the project
    #[arg(long, value_name = "CMD")]
    pub build_command: Option<String>,

    /// Token of the CI platform
    ///
    /// Only masked in the CI log; sizing never uses it.
    #[arg(long, value_name = "TOKEN")]
    pub token: Option<String>,

    /// List the workspace and build output after building
    #[arg(long)]
    pub diagnostics: bool,
}

/// Arguments for the size command
#[derive(Args, Debug, Clone, Default)]
pub struct SizeArgs {
    #[command(flatten)]
    pub sizing: SizingOptions,
}
