use std::fmt;
use std::path::PathBuf;

/// Which of the two build manifests an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestKind {
    /// `build-manifest.json`, page route to client asset list.
    Build,
    /// `serverless/pages-manifest.json`, page route to server entry.
    ServerlessPages,
}

impl ManifestKind {
    /// Location of the manifest relative to the build-output directory.
    pub fn relative_path(self) -> &'static str {
        match self {
            ManifestKind::Build => "build-manifest.json",
            ManifestKind::ServerlessPages => "serverless/pages-manifest.json",
        }
    }
}

impl fmt::Display for ManifestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestKind::Build => write!(f, "build manifest"),
            ManifestKind::ServerlessPages => write!(f, "serverless pages manifest"),
        }
    }
}

/// Error types for pagesize-core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A manifest is absent, unreadable or not valid JSON.
    #[error(
        "No {kind} found at `{}`: {source}\n\nHint: run the install and build commands first (e.g. `npm install && npm run build`)",
        .path.display()
    )]
    ManifestMissing {
        kind: ManifestKind,
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A single asset could not be statted or compressed.
    #[error("Could not determine file size of `{file}`: {source}")]
    SizingFailure {
        file: String,
        #[source]
        source: std::io::Error,
    },

    /// The task sizing a page panicked before producing a result.
    #[error("Sizing of page `{page}` was aborted")]
    PageAborted { page: String },
}

/// Result type alias for pagesize-core operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub(crate) fn sizing(file: impl Into<String>, source: std::io::Error) -> Self {
        Error::SizingFailure {
            file: file.into(),
            source,
        }
    }
}

impl miette::Diagnostic for Error {
    fn code(&self) -> Option<Box<dyn fmt::Display + '_>> {
        Some(Box::new(match self {
            Error::ManifestMissing { .. } => "MANIFEST_MISSING",
            Error::SizingFailure { .. } => "SIZING_FAILURE",
            Error::PageAborted { .. } => "PAGE_ABORTED",
        }))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(miette::Severity::Error)
    }

    fn help(&self) -> Option<Box<dyn fmt::Display + '_>> {
        match self {
            Error::SizingFailure { file, .. } => Some(Box::new(format!(
                "'{}' is referenced by the build manifest but could not be read or compressed.\nCheck that the build finished and that the output directory is writable.",
                file
            ))),
            Error::PageAborted { .. } => Some(Box::new(
                "The sizing task panicked. This is a bug in pagesize. Please report it.",
            )),
            Error::ManifestMissing { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use miette::Diagnostic;

    #[test]
    fn test_manifest_missing_has_remediation_hint() {
        let err = Error::ManifestMissing {
            kind: ManifestKind::Build,
            path: PathBuf::from("/app/.next/build-manifest.json"),
            source: Box::new(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "No such file or directory",
            )),
        };
        let msg = err.to_string();
        assert!(msg.contains("No build manifest found"));
        assert!(msg.contains("/app/.next/build-manifest.json"));
        assert!(msg.contains("Hint: run the install and build commands first"));
    }

    #[test]
    fn test_sizing_failure_names_file() {
        let err = Error::sizing(
            "static/chunks/main.js",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.to_string().contains("Could not determine file size"));
        assert!(err.to_string().contains("static/chunks/main.js"));
        assert_eq!(err.code().unwrap().to_string(), "SIZING_FAILURE");
        assert!(err.help().is_some());
    }

    #[test]
    fn test_manifest_kind_paths() {
        assert_eq!(ManifestKind::Build.relative_path(), "build-manifest.json");
        assert_eq!(
            ManifestKind::ServerlessPages.relative_path(),
            "serverless/pages-manifest.json"
        );
        assert_eq!(
            ManifestKind::ServerlessPages.to_string(),
            "serverless pages manifest"
        );
    }
}
