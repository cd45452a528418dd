//! End-to-end sizing of a fake Next.js build output.

use pagesize_core::{size_pages, Error, Manifests, PageKind, SizeReport};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, contents: impl AsRef<[u8]>) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn fake_build(root: &Path) {
    write(
        root,
        "build-manifest.json",
        r#"{
            "pages": {
                "/": ["static/chunks/index.js"],
                "/about": ["static/chunks/about.js"]
            }
        }"#,
    );
    write(
        root,
        "serverless/pages-manifest.json",
        r#"{ "/about": "pages/about.js" }"#,
    );
    write(root, "static/chunks/index.js", vec![b'i'; 2048]);
    write(root, "static/chunks/about.js", vec![b'a'; 4096]);
    write(root, "serverless/pages/about.js", "module.exports = {};\n".repeat(64));
}

#[tokio::test]
async fn test_two_page_build() {
    let temp = TempDir::new().unwrap();
    let build_dir = temp.path().join(".next");
    fake_build(&build_dir);

    let manifests = Manifests::load(&build_dir, false).unwrap();
    let outcomes = size_pages(&build_dir, manifests.plan()).await;
    let report = SizeReport::new(outcomes.into_iter().map(|o| o.unwrap()).collect());

    assert_eq!(report.pages.len(), 2);
    assert_eq!(report.pages[0].page, "/");
    assert_eq!(report.pages[0].total_size, 2.0);
    assert_eq!(report.pages[1].page, "/about");
    assert_eq!(report.pages[1].total_size, 4.0);
    for page in &report.pages {
        assert!(page.total_gzipped_size <= page.total_size);
    }

    assert!(build_dir.join("static/chunks/index.js.gz").exists());
    assert!(build_dir.join("static/chunks/about.js.gz").exists());
}

#[tokio::test]
async fn test_serverless_pages_share_the_report() {
    let temp = TempDir::new().unwrap();
    let build_dir = temp.path().join(".next");
    fake_build(&build_dir);

    let manifests = Manifests::load(&build_dir, true).unwrap();
    let outcomes = size_pages(&build_dir, manifests.plan()).await;
    let report = SizeReport::new(outcomes.into_iter().map(|o| o.unwrap()).collect());

    let serverless = report.largest(PageKind::Serverless).unwrap();
    assert_eq!(serverless.page, "/about");
    assert_eq!(serverless.files[0].file, "serverless/pages/about.js");
    assert!(build_dir.join("serverless/pages/about.js.gz").exists());
}

#[test]
fn test_missing_build_output() {
    let temp = TempDir::new().unwrap();

    let err = Manifests::load(&temp.path().join(".next"), true).unwrap_err();

    assert!(matches!(err, Error::ManifestMissing { .. }));
    assert!(err.to_string().contains("Hint: run the install and build commands first"));
}

#[test]
fn test_missing_serverless_manifest_is_fatal_when_required() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "build-manifest.json", r#"{ "pages": {} }"#);

    assert!(Manifests::load(temp.path(), true).is_err());
    assert!(Manifests::load(temp.path(), false).is_ok());
}
