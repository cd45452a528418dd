//! Raw and gzipped size measurement for a single bundle.
//!
//! Sizing has a visible side effect: a `<asset>.gz` sibling is left next to
//! every measured asset. The compressed stream is written to a temporary file
//! in the same directory and renamed into place once it has been measured, so
//! pages sharing a chunk can size it at the same time.

use crate::error::{Error, Result};
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Extension appended to the compressed sibling of each asset.
pub const GZIP_EXTENSION: &str = "gz";

/// Size of one bundle, in kilobytes rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizedBundle {
    /// Asset path relative to the build-output directory
    pub file: String,
    /// Raw size in KB
    pub file_size: f64,
    /// Gzipped size in KB
    pub gzipped_file_size: f64,
}

/// Round a kilobyte value to two decimals.
///
/// ```
/// use pagesize_core::round_kb;
///
/// assert_eq!(round_kb(3.2300000000000004), 3.23);
/// assert_eq!(round_kb(1.005), 1.0);
/// ```
pub fn round_kb(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Convert a byte count to kilobytes, rounded to two decimals.
///
/// ```
/// use pagesize_core::bytes_to_kb;
///
/// assert_eq!(bytes_to_kb(2048), 2.0);
/// assert_eq!(bytes_to_kb(1536), 1.5);
/// ```
pub fn bytes_to_kb(bytes: u64) -> f64 {
    round_kb(bytes as f64 / 1024.0)
}

/// Path of the compressed sibling for `source` (`main.js` -> `main.js.gz`).
pub fn gzip_path(source: &Path) -> PathBuf {
    let mut name = OsString::from(source.as_os_str());
    name.push(".");
    name.push(GZIP_EXTENSION);
    PathBuf::from(name)
}

/// Measure `file` (relative to `build_dir`) and write its `.gz` sibling.
///
/// Blocking; the pipeline runs it on tokio's blocking pool.
///
/// # Errors
///
/// Returns [`Error::SizingFailure`] if the asset cannot be statted, read or
/// compressed.
pub fn size_bundle(build_dir: &Path, file: &str) -> Result<SizedBundle> {
    measure(build_dir, file).map_err(|e| Error::sizing(file, e))
}

pub(crate) fn measure(build_dir: &Path, file: &str) -> io::Result<SizedBundle> {
    let source = build_dir.join(file);

    let file_size = fs::metadata(&source)?.len();
    let gzipped_file_size = gzip_file(&source)?;

    debug!(
        "{}: {} bytes raw, {} bytes gzipped",
        file, file_size, gzipped_file_size
    );

    Ok(SizedBundle {
        file: file.to_string(),
        file_size: bytes_to_kb(file_size),
        gzipped_file_size: bytes_to_kb(gzipped_file_size),
    })
}

/// Gzip `source` into its `.gz` sibling and return the compressed length.
fn gzip_file(source: &Path) -> io::Result<u64> {
    let dir = source.parent().unwrap_or_else(|| Path::new("."));
    let staging = NamedTempFile::new_in(dir)?;

    let mut reader = BufReader::new(File::open(source)?);
    let mut encoder = GzEncoder::new(BufWriter::new(staging), Compression::default());
    io::copy(&mut reader, &mut encoder)?;

    let mut writer = encoder.finish()?;
    writer.flush()?;
    let staging = writer.into_inner().map_err(|e| e.into_error())?;

    let compressed = staging.as_file().metadata()?.len();
    staging.persist(gzip_path(source)).map_err(|e| e.error)?;

    Ok(compressed)
}
