use super::{BuildManifest, ServerlessPagesManifest};
use crate::error::{Error, ManifestKind, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load `build-manifest.json` from the build-output directory.
///
/// # Errors
///
/// Returns [`Error::ManifestMissing`] if the file is absent or unparseable.
pub fn load_build_manifest(build_dir: &Path) -> Result<BuildManifest> {
    load(build_dir, ManifestKind::Build)
}

/// Load `serverless/pages-manifest.json` from the build-output directory.
///
/// # Errors
///
/// Returns [`Error::ManifestMissing`] if the file is absent or unparseable.
pub fn load_serverless_pages_manifest(build_dir: &Path) -> Result<ServerlessPagesManifest> {
    load(build_dir, ManifestKind::ServerlessPages)
}

fn load<T: DeserializeOwned>(build_dir: &Path, kind: ManifestKind) -> Result<T> {
    let path = build_dir.join(kind.relative_path());
    debug!("Reading {} from {}", kind, path.display());

    let missing = |source: Box<dyn std::error::Error + Send + Sync>| Error::ManifestMissing {
        kind,
        path: path.clone(),
        source,
    };

    let content = fs::read_to_string(&path).map_err(|e| missing(Box::new(e)))?;
    serde_json::from_str(&content).map_err(|e| missing(Box::new(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_build_manifest() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("build-manifest.json"),
            r#"{ "pages": { "/a": ["static/a.js"] } }"#,
        )
        .unwrap();

        let manifest = load_build_manifest(temp.path()).unwrap();
        assert_eq!(manifest.pages["/a"], vec!["static/a.js".to_string()]);
    }

    #[test]
    fn test_load_serverless_pages_manifest() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("serverless")).unwrap();
        fs::write(
            temp.path().join("serverless/pages-manifest.json"),
            r#"{ "/a": "pages/a.js" }"#,
        )
        .unwrap();

        let manifest = load_serverless_pages_manifest(temp.path()).unwrap();
        assert_eq!(manifest.pages["/a"], "pages/a.js");
    }

    #[test]
    fn test_missing_manifest() {
        let temp = TempDir::new().unwrap();

        let err = load_build_manifest(temp.path()).unwrap_err();

        match &err {
            Error::ManifestMissing { kind, path, .. } => {
                assert_eq!(*kind, ManifestKind::Build);
                assert_eq!(path, &temp.path().join("build-manifest.json"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("run the install and build commands first"));
    }

    #[test]
    fn test_unparseable_manifest() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("serverless")).unwrap();
        fs::write(temp.path().join("serverless/pages-manifest.json"), "{ not json").unwrap();

        let err = load_serverless_pages_manifest(temp.path()).unwrap_err();

        assert!(matches!(
            err,
            Error::ManifestMissing {
                kind: ManifestKind::ServerlessPages,
                ..
            }
        ));
    }
}
