use crate::cli::{RunArgs, SizeArgs, SizingOptions};
use crate::config::PagesizeConfig;
use crate::error::{ConfigError, Result};
use figment::{
    providers::{Env, Format as _, Json, Serialized},
    Figment,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Config file looked up in the current directory when `--config` is absent.
pub const CONFIG_FILE: &str = "pagesize.config.json";

/// Keys read from `PAGESIZE_*` variables with typed parsing.
const ENV_KEYS: &[&str] = &[
    "workspace",
    "install_command",
    "build_command",
    "dist_path",
    "serverless",
    "diagnostics",
    "report_path",
];

/// Inputs a GitHub Action exposes as `INPUT_*` variables.
const ACTION_INPUTS: &[&str] = &[
    "token",
    "workspace",
    "install_command",
    "build_command",
    "dist_path",
];

/// Values given on the command line. Only set fields override other sources.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dist_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serverless: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_path: Option<PathBuf>,
}

impl From<&SizingOptions> for ConfigOverrides {
    fn from(opts: &SizingOptions) -> Self {
        Self {
            workspace: opts.workspace.clone(),
            dist_path: opts.dist_path.clone(),
            serverless: opts.no_serverless.then_some(false),
            report_path: opts.report.clone(),
            ..Self::default()
        }
    }
}

impl From<&RunArgs> for ConfigOverrides {
    fn from(args: &RunArgs) -> Self {
        Self {
            token: args.token.clone(),
            install_command: args.install_command.clone(),
            build_command: args.build_command.clone(),
            diagnostics: args.diagnostics.then_some(true),
            ..Self::from(&args.sizing)
        }
    }
}

impl From<&SizeArgs> for ConfigOverrides {
    fn from(args: &SizeArgs) -> Self {
        Self::from(&args.sizing)
    }
}

impl PagesizeConfig {
    /// Load configuration from multiple sources.
    /// Priority: CLI args > Actions inputs > environment > config file > defaults
    pub fn load(overrides: &ConfigOverrides, config_path: Option<&Path>) -> Result<Self> {
        Self::figment(overrides, config_path)?
            .extract()
            .map_err(|e| {
                ConfigError::InvalidValue {
                    field: "configuration".to_string(),
                    value: e.to_string(),
                    hint: format!("Check {} syntax and field types", CONFIG_FILE),
                }
                .into()
            })
    }

    fn figment(overrides: &ConfigOverrides, config_path: Option<&Path>) -> Result<Figment> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        // An explicit --config must exist; the default file is optional
        let config_file = match config_path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound(path.to_path_buf()).into());
            }
            Some(path) => Some(path.to_path_buf()),
            None => {
                let default_path = Path::new(CONFIG_FILE);
                default_path.exists().then(|| default_path.to_path_buf())
            }
        };

        if let Some(path) = config_file {
            figment = figment.merge(Json::file(path));
        }

        // PAGESIZE_DIST_PATH, PAGESIZE_SERVERLESS, ...
        figment = figment
            .merge(Env::prefixed("PAGESIZE_").only(ENV_KEYS))
            .merge(string_env("PAGESIZE_", &["token"]))
            .merge(string_env("INPUT_", ACTION_INPUTS));

        Ok(figment.merge(Serialized::defaults(overrides)))
    }
}

/// Non-empty `<prefix><KEY>` variables, kept as strings.
///
/// Actions sets `INPUT_*` for every declared input, empty when the workflow
/// leaves it out; those must not shadow lower-priority sources. Tokens are
/// kept as strings even when they look numeric.
fn string_env(prefix: &str, keys: &[&str]) -> Serialized<BTreeMap<String, String>> {
    let values: BTreeMap<String, String> = Env::prefixed(prefix)
        .only(keys)
        .iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(key, value)| (key.as_str().to_ascii_lowercase(), value))
        .collect();
    Serialized::defaults(values)
}
