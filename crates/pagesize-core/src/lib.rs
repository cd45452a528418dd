//! # pagesize-core
//!
//! Per-page bundle sizing for Next.js build output.
//!
//! The crate reads the manifests a Next.js build leaves in its output
//! directory, turns every page into a list of pending sizing tasks, measures
//! each referenced asset (raw and gzipped) and aggregates the sizes per page.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pagesize_core::{size_pages, Manifests};
//! use std::path::Path;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let build_dir = Path::new("/work/app/.next");
//! let manifests = Manifests::load(build_dir, true)?;
//!
//! let outcomes = size_pages(build_dir, manifests.plan()).await;
//! for outcome in outcomes {
//!     let report = outcome?;
//!     println!("{} {:.2} KB", report.page, report.total_size);
//! }
//! # Ok(()) }
//! ```
//!
//! Every sized asset gets a `<asset>.gz` sibling written next to it.

pub mod manifest;
pub mod pipeline;
pub mod report;
pub mod sizer;

mod error;

pub use error::{Error, ManifestKind, Result};
pub use manifest::{
    parse_build_manifest, parse_serverless_pages_manifest, plan_pages, BuildManifest, Manifests,
    PageKind, PageTasks, ServerlessPagesManifest, SizingTask,
};
pub use pipeline::{default_max_parallel, size_pages, size_pages_with, AssetSizer, PageOutcome};
pub use report::{PageSizeReport, SizeReport};
pub use sizer::{bytes_to_kb, round_kb, size_bundle, SizedBundle};
