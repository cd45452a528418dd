//! Per-page aggregation of sized bundles.

use crate::manifest::PageKind;
use crate::sizer::{round_kb, SizedBundle};
use serde::{Deserialize, Serialize};

/// Raw and gzipped weight of one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSizeReport {
    pub page: String,
    pub kind: PageKind,
    pub files: Vec<SizedBundle>,
    /// Sum of `fileSize` over `files`, KB
    pub total_size: f64,
    /// Sum of `gzippedFileSize` over `files`, KB
    pub total_gzipped_size: f64,
}

impl PageSizeReport {
    /// Sum the bundles of one page. Totals are rounded to two decimals.
    ///
    /// ```
    /// use pagesize_core::{PageKind, PageSizeReport, SizedBundle};
    ///
    /// let report = PageSizeReport::from_bundles(
    ///     "/",
    ///     PageKind::Client,
    ///     vec![
    ///         SizedBundle { file: "a.js".into(), file_size: 1.23, gzipped_file_size: 0.50 },
    ///         SizedBundle { file: "b.js".into(), file_size: 2.00, gzipped_file_size: 0.75 },
    ///     ],
    /// );
    /// assert_eq!(report.total_size, 3.23);
    /// assert_eq!(report.total_gzipped_size, 1.25);
    /// ```
    pub fn from_bundles(page: impl Into<String>, kind: PageKind, files: Vec<SizedBundle>) -> Self {
        let (total, gzipped) = files.iter().fold((0.0, 0.0), |(total, gzipped), file| {
            (total + file.file_size, gzipped + file.gzipped_file_size)
        });

        Self {
            page: page.into(),
            kind,
            files,
            total_size: round_kb(total),
            total_gzipped_size: round_kb(gzipped),
        }
    }
}

/// Every page report of a run, in manifest order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeReport {
    pub pages: Vec<PageSizeReport>,
    pub total_size: f64,
    pub total_gzipped_size: f64,
}

impl SizeReport {
    pub fn new(pages: Vec<PageSizeReport>) -> Self {
        let total_size = round_kb(pages.iter().map(|p| p.total_size).sum());
        let total_gzipped_size = round_kb(pages.iter().map(|p| p.total_gzipped_size).sum());
        Self {
            pages,
            total_size,
            total_gzipped_size,
        }
    }

    /// Heaviest page of the given kind, by gzipped size.
    pub fn largest(&self, kind: PageKind) -> Option<&PageSizeReport> {
        self.pages
            .iter()
            .filter(|p| p.kind == kind)
            .max_by(|a, b| a.total_gzipped_size.total_cmp(&b.total_gzipped_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle(file: &str, size: f64, gzipped: f64) -> SizedBundle {
        SizedBundle {
            file: file.to_string(),
            file_size: size,
            gzipped_file_size: gzipped,
        }
    }

    #[test]
    fn test_page_totals() {
        let report = PageSizeReport::from_bundles(
            "/b",
            PageKind::Client,
            vec![bundle("static/b.js", 1.23, 0.50), bundle("static/c.js", 2.00, 0.75)],
        );
        assert_eq!(report.total_size, 3.23);
        assert_eq!(report.total_gzipped_size, 1.25);
        assert_eq!(report.files.len(), 2);
    }

    #[test]
    fn test_empty_page() {
        let report = PageSizeReport::from_bundles("/empty", PageKind::Client, vec![]);
        assert_eq!(report.total_size, 0.0);
        assert_eq!(report.total_gzipped_size, 0.0);
    }

    #[test]
    fn test_size_report_totals_and_largest() {
        let report = SizeReport::new(vec![
            PageSizeReport::from_bundles("/a", PageKind::Client, vec![bundle("a.js", 2.0, 1.1)]),
            PageSizeReport::from_bundles("/b", PageKind::Client, vec![bundle("b.js", 4.0, 0.9)]),
            PageSizeReport::from_bundles(
                "/a",
                PageKind::Serverless,
                vec![bundle("serverless/pages/a.js", 9.0, 3.0)],
            ),
        ]);

        assert_eq!(report.total_size, 15.0);
        assert_eq!(report.total_gzipped_size, 5.0);
        assert_eq!(report.largest(PageKind::Client).unwrap().page, "/a");
        assert_eq!(
            report.largest(PageKind::Serverless).unwrap().files[0].file,
            "serverless/pages/a.js"
        );
    }

    #[test]
    fn test_report_json_shape() {
        let report = SizeReport::new(vec![PageSizeReport::from_bundles(
            "/",
            PageKind::Client,
            vec![bundle("static/a.js", 1.0, 0.5)],
        )]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["pages"][0]["page"], "/");
        assert_eq!(json["pages"][0]["kind"], "client");
        assert_eq!(json["pages"][0]["totalGzippedSize"], 0.5);
        assert_eq!(json["totalSize"], 1.0);
    }
}
