//! Configuration system for pagesize with multi-source loading.
//!
//! Priority: CLI > GitHub Actions inputs > Environment > File > Defaults

mod defaults;
mod loading;
mod validation;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use defaults::*;
pub use loading::{ConfigOverrides, CONFIG_FILE};

/// pagesize configuration - loaded from pagesize.config.json, the
/// environment and CLI args.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PagesizeConfig {
    /// CI platform token. Masked in logs, never used for sizing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Root of the Next.js project
    #[serde(default = "default_workspace")]
    pub workspace: PathBuf,

    /// Command installing dependencies (e.g. "npm ci")
    #[serde(default = "default_install_command")]
    pub install_command: String,

    /// Command building the project (e.g. "npm run build")
    #[serde(default = "default_build_command")]
    pub build_command: String,

    /// Build output directory, relative to the workspace
    #[serde(default = "default_dist_path")]
    pub dist_path: PathBuf,

    /// Read serverless/pages-manifest.json as well
    #[serde(default = "default_serverless")]
    pub serverless: bool,

    /// List the workspace and build output after building
    #[serde(default)]
    pub diagnostics: bool,

    /// Where to write the JSON size report, relative to the workspace
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_path: Option<PathBuf>,
}

impl PagesizeConfig {
    /// Absolute build-output directory for a resolved workspace.
    pub fn build_dir(&self, workspace: &Path) -> PathBuf {
        if self.dist_path.is_absolute() {
            self.dist_path.clone()
        } else {
            workspace.join(&self.dist_path)
        }
    }
}

impl Default for PagesizeConfig {
    fn default() -> Self {
        Self {
            token: None,
            workspace: default_workspace(),
            install_command: default_install_command(),
            build_command: default_build_command(),
            dist_path: default_dist_path(),
            serverless: default_serverless(),
            diagnostics: false,
            report_path: None,
        }
    }
}
