//! Next.js build manifests and the sizing tasks derived from them.
//!
//! Both manifests are produced by `next build` inside the build-output
//! directory (`.next` by default):
//!
//! - `build-manifest.json`: `{ "pages": { "/route": ["static/...js", ...] } }`
//! - `serverless/pages-manifest.json`: `{ "/route": "pages/route.js" }`
//!
//! Page order follows the declaration order in the JSON files.

mod loader;
mod parse;

pub use loader::{load_build_manifest, load_serverless_pages_manifest};
pub use parse::{parse_build_manifest, parse_serverless_pages_manifest, plan_pages};

use crate::error::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Segment prefixed to every serverless entry path.
pub const SERVERLESS_DIR: &str = "serverless";

/// Client build manifest: page route to the assets that page loads.
///
/// Other top-level keys written by the build tool are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildManifest {
    pub pages: IndexMap<String, Vec<String>>,
}

/// Serverless pages manifest: page route to its server-rendering entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServerlessPagesManifest {
    pub pages: IndexMap<String, String>,
}

/// Where a page's sizing tasks came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    Client,
    Serverless,
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageKind::Client => write!(f, "client"),
            PageKind::Serverless => write!(f, "serverless"),
        }
    }
}

/// A pending size computation for one asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizingTask {
    file: String,
}

impl SizingTask {
    pub fn new(file: impl Into<String>) -> Self {
        Self { file: file.into() }
    }

    /// Asset path relative to the build-output directory.
    pub fn file(&self) -> &str {
        &self.file
    }
}

/// All sizing tasks belonging to one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTasks {
    pub page: String,
    pub kind: PageKind,
    pub tasks: Vec<SizingTask>,
}

/// The manifests of one build, loaded from its output directory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Manifests {
    pub build: BuildManifest,
    pub serverless: Option<ServerlessPagesManifest>,
}

impl Manifests {
    /// Load the build manifest and, if `include_serverless`, the serverless
    /// pages manifest from `build_dir`.
    pub fn load(build_dir: &Path, include_serverless: bool) -> Result<Self> {
        let build = load_build_manifest(build_dir)?;
        let serverless = if include_serverless {
            Some(load_serverless_pages_manifest(build_dir)?)
        } else {
            None
        };
        Ok(Self { build, serverless })
    }

    /// Sizing plan: client pages first, then serverless pages.
    pub fn plan(&self) -> Vec<PageTasks> {
        let client = parse_build_manifest(&self.build);
        let serverless = self.serverless.as_ref().map(parse_serverless_pages_manifest);
        plan_pages(client, serverless)
    }
}
