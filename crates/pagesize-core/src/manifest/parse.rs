use super::{
    BuildManifest, PageKind, PageTasks, ServerlessPagesManifest, SizingTask, SERVERLESS_DIR,
};
use indexmap::IndexMap;

/// Map every client page to one sizing task per asset, in manifest order.
pub fn parse_build_manifest(manifest: &BuildManifest) -> IndexMap<String, Vec<SizingTask>> {
    manifest
        .pages
        .iter()
        .map(|(page, assets)| {
            let tasks = assets.iter().map(|asset| SizingTask::new(asset.as_str())).collect();
            (page.clone(), tasks)
        })
        .collect()
}

/// Map every serverless page to a sizing task for its entry file.
///
/// Entry paths are relative to the `serverless/` directory of the build
/// output, so the task path gets that prefix.
pub fn parse_serverless_pages_manifest(
    manifest: &ServerlessPagesManifest,
) -> IndexMap<String, SizingTask> {
    manifest
        .pages
        .iter()
        .map(|(page, entry)| {
            let entry = entry.trim_start_matches('/');
            (page.clone(), SizingTask::new(format!("{SERVERLESS_DIR}/{entry}")))
        })
        .collect()
}

/// Flatten parsed manifests into the ordered list the pipeline consumes.
pub fn plan_pages(
    client: IndexMap<String, Vec<SizingTask>>,
    serverless: Option<IndexMap<String, SizingTask>>,
) -> Vec<PageTasks> {
    let client = client.into_iter().map(|(page, tasks)| PageTasks {
        page,
        kind: PageKind::Client,
        tasks,
    });
    let serverless = serverless.into_iter().flatten().map(|(page, task)| PageTasks {
        page,
        kind: PageKind::Serverless,
        tasks: vec![task],
    });
    client.chain(serverless).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_manifest() -> BuildManifest {
        serde_json::from_str(
            r#"{ "pages": { "/a": ["static/a.js"], "/b": ["static/b.js", "static/c.js"] } }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_parse_build_manifest() {
        let pages = parse_build_manifest(&build_manifest());

        assert_eq!(pages.len(), 2);
        assert_eq!(pages["/a"].len(), 1);
        assert_eq!(pages["/b"].len(), 2);
        assert_eq!(pages["/b"][0].file(), "static/b.js");
        assert_eq!(pages["/b"][1].file(), "static/c.js");
    }

    #[test]
    fn test_parse_build_manifest_empty_page() {
        let manifest: BuildManifest =
            serde_json::from_str(r#"{ "pages": { "/empty": [] } }"#).unwrap();
        let pages = parse_build_manifest(&manifest);
        assert!(pages["/empty"].is_empty());
    }

    #[test]
    fn test_parse_serverless_pages_manifest() {
        let manifest: ServerlessPagesManifest =
            serde_json::from_str(r#"{ "/a": "pages/a.js" }"#).unwrap();

        let pages = parse_serverless_pages_manifest(&manifest);

        assert_eq!(pages.len(), 1);
        assert_eq!(pages["/a"].file(), "serverless/pages/a.js");
    }

    #[test]
    fn test_parse_serverless_strips_leading_slash() {
        let manifest: ServerlessPagesManifest =
            serde_json::from_str(r#"{ "/a": "/pages/a.js" }"#).unwrap();
        let pages = parse_serverless_pages_manifest(&manifest);
        assert_eq!(pages["/a"].file(), "serverless/pages/a.js");
    }

    #[test]
    fn test_plan_pages_order() {
        let serverless: ServerlessPagesManifest =
            serde_json::from_str(r#"{ "/a": "pages/a.js" }"#).unwrap();

        let plan = plan_pages(
            parse_build_manifest(&build_manifest()),
            Some(parse_serverless_pages_manifest(&serverless)),
        );

        let summary: Vec<_> = plan
            .iter()
            .map(|p| (p.page.as_str(), p.kind, p.tasks.len()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("/a", PageKind::Client, 1),
                ("/b", PageKind::Client, 2),
                ("/a", PageKind::Serverless, 1),
            ]
        );
    }
}
