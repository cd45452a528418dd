use crate::config::PagesizeConfig;
use crate::error::{ConfigError, Result};
use std::path::{Path, PathBuf};

impl PagesizeConfig {
    /// Validate configuration for logical consistency.
    pub fn validate(&self) -> Result<()> {
        if self.workspace.as_os_str().is_empty() {
            return Err(ConfigError::MissingField {
                field: "workspace".to_string(),
                hint: "Point workspace at the root of the Next.js project".to_string(),
            }
            .into());
        }

        if self.dist_path.as_os_str().is_empty() {
            return Err(ConfigError::MissingField {
                field: "dist_path".to_string(),
                hint: "Set dist_path to the build output directory (usually .next)".to_string(),
            }
            .into());
        }

        if let Some(report) = &self.report_path {
            if report.as_os_str().is_empty() || report.ends_with("..") {
                return Err(ConfigError::InvalidValue {
                    field: "report_path".to_string(),
                    value: report.display().to_string(),
                    hint: "report_path must name a file".to_string(),
                }
                .into());
            }
        }

        Ok(())
    }

    /// Resolve the workspace against `cwd` and check it is a directory.
    pub fn resolve_workspace(&self, cwd: &Path) -> Result<PathBuf> {
        let workspace = if self.workspace.is_absolute() {
            self.workspace.clone()
        } else {
            cwd.join(&self.workspace)
        };

        if !workspace.is_dir() {
            return Err(ConfigError::InvalidValue {
                field: "workspace".to_string(),
                value: workspace.display().to_string(),
                hint: "The workspace must be an existing directory".to_string(),
            }
            .into());
        }

        Ok(workspace)
    }
}
