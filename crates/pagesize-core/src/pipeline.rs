//! Concurrent sizing of every page in a build.
//!
//! One task per page is spawned into a [`JoinSet`]. Inside a page, all asset
//! tasks run at once and the first failure aborts that page only. Each page
//! is logged as soon as it resolves; [`size_pages`] returns once every page
//! has finished, with outcomes in plan order.
//!
//! Pages share one [`AssetSizer`]. Next.js lists common chunks (framework,
//! main, webpack runtime) on every page; each distinct asset is measured
//! once, and at most `max_parallel` measurements run on the blocking pool at
//! a time.

use crate::error::{Error, Result};
use crate::manifest::{PageTasks, SizingTask};
use crate::report::PageSizeReport;
use crate::sizer::{self, SizedBundle};
use futures::future::try_join_all;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::{OnceCell, Semaphore};
use tokio::task::JoinSet;
use tracing::{debug, error, info};

/// Result of sizing one page.
pub type PageOutcome = Result<PageSizeReport>;

type Measured = std::result::Result<SizedBundle, Arc<io::Error>>;

/// Default bound on concurrent asset measurements.
pub fn default_max_parallel() -> usize {
    num_cpus::get().min(8)
}

/// Measures assets of one build directory, each distinct path once.
#[derive(Debug)]
pub struct AssetSizer {
    build_dir: PathBuf,
    permits: Semaphore,
    measured: Mutex<HashMap<String, Arc<OnceCell<Measured>>>>,
}

impl AssetSizer {
    /// `max_parallel` of zero is treated as one.
    pub fn new(build_dir: impl Into<PathBuf>, max_parallel: usize) -> Self {
        Self {
            build_dir: build_dir.into(),
            permits: Semaphore::new(max_parallel.max(1)),
            measured: Mutex::new(HashMap::new()),
        }
    }

    /// Size the asset of `task`, reusing an earlier measurement of the same
    /// path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizingFailure`] naming the asset if it cannot be
    /// measured. Every page referencing a failed asset gets the failure.
    pub async fn size(&self, task: &SizingTask) -> Result<SizedBundle> {
        let cell = Arc::clone(
            self.measured
                .lock()
                .entry(task.file().to_string())
                .or_default(),
        );

        cell.get_or_init(|| self.measure(task.file()))
            .await
            .clone()
            .map_err(|e| Error::sizing(task.file(), io::Error::new(e.kind(), e.to_string())))
    }

    /// Number of distinct assets measured or in flight.
    pub fn distinct_assets(&self) -> usize {
        self.measured.lock().len()
    }

    async fn measure(&self, file: &str) -> Measured {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|e| Arc::new(io::Error::other(e)))?;

        let build_dir = self.build_dir.clone();
        let owned = file.to_string();
        match tokio::task::spawn_blocking(move || sizer::measure(&build_dir, &owned)).await {
            Ok(measured) => measured.map_err(Arc::new),
            Err(join_err) => Err(Arc::new(io::Error::other(join_err.to_string()))),
        }
    }
}

/// Size every page in `plan` against `build_dir`.
///
/// The returned vector has one entry per planned page, in the same order.
pub async fn size_pages(build_dir: &Path, plan: Vec<PageTasks>) -> Vec<PageOutcome> {
    size_pages_with(Arc::new(AssetSizer::new(build_dir, default_max_parallel())), plan).await
}

/// Size every page in `plan` with a caller-provided [`AssetSizer`].
pub async fn size_pages_with(sizer: Arc<AssetSizer>, plan: Vec<PageTasks>) -> Vec<PageOutcome> {
    let pages: Vec<String> = plan.iter().map(|p| p.page.clone()).collect();
    let mut join_set = JoinSet::new();

    for (index, page) in plan.into_iter().enumerate() {
        let sizer = Arc::clone(&sizer);
        join_set.spawn(async move { (index, size_page(&sizer, page).await) });
    }

    let mut outcomes: Vec<Option<PageOutcome>> = pages.iter().map(|_| None).collect();
    while let Some(joined) = join_set.join_next().await {
        match joined {
            Ok((index, outcome)) => outcomes[index] = Some(outcome),
            Err(join_err) => error!("Page sizing task failed: {}", join_err),
        }
    }
    debug!("Measured {} distinct assets", sizer.distinct_assets());

    outcomes
        .into_iter()
        .zip(pages)
        .map(|(outcome, page)| outcome.unwrap_or_else(|| Err(Error::PageAborted { page })))
        .collect()
}

/// Size all assets of one page and log its totals.
async fn size_page(sizer: &AssetSizer, page: PageTasks) -> PageOutcome {
    let PageTasks { page, kind, tasks } = page;

    let files = match try_join_all(tasks.iter().map(|task| sizer.size(task))).await {
        Ok(files) => files,
        Err(err) => {
            error!("{} ({}): {}", page, kind, err);
            return Err(err);
        }
    };

    for file in &files {
        info!(
            "  {} {:.2} KB ({:.2} KB gzipped)",
            file.file, file.file_size, file.gzipped_file_size
        );
    }

    let report = PageSizeReport::from_bundles(page, kind, files);
    info!(
        "{} [{}] {:.2} KB ({:.2} KB gzipped)",
        report.page, report.kind, report.total_size, report.total_gzipped_size
    );

    Ok(report)
}
