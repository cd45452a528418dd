//! Formatting of sizes and the end-of-run summary table.

use super::paint;
use console::Term;
use owo_colors::Style;
use pagesize_core::{PageKind, SizeReport};

/// Format a kilobyte value with two decimals.
///
/// # Examples
///
/// ```
/// use pagesize_cli::ui::format_kb;
///
/// assert_eq!(format_kb(0.0), "0.00 KB");
/// assert_eq!(format_kb(3.23), "3.23 KB");
/// assert_eq!(format_kb(1536.0), "1.50 MB");
/// ```
pub fn format_kb(kb: f64) -> String {
    if kb >= 1024.0 {
        format!("{:.2} MB", kb / 1024.0)
    } else {
        format!("{:.2} KB", kb)
    }
}

/// Plain-text rows of the summary, one per page plus a total line.
///
/// Serverless pages are suffixed with `(serverless)`.
pub fn summary_lines(report: &SizeReport) -> Vec<String> {
    let labels: Vec<String> = report
        .pages
        .iter()
        .map(|page| match page.kind {
            PageKind::Client => page.page.clone(),
            PageKind::Serverless => format!("{} (serverless)", page.page),
        })
        .collect();
    let width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    let mut lines: Vec<String> = report
        .pages
        .iter()
        .zip(&labels)
        .map(|(page, label)| {
            format!(
                "{:<width$}  {:>10}  {:>10} gzipped",
                label,
                format_kb(page.total_size),
                format_kb(page.total_gzipped_size),
            )
        })
        .collect();

    lines.push(format!(
        "{:<width$}  {:>10}  {:>10} gzipped",
        "Total",
        format_kb(report.total_size),
        format_kb(report.total_gzipped_size),
    ));
    lines
}

/// Print the summary table to stderr.
///
/// # Examples
///
/// ```no_run
/// use pagesize_cli::ui::print_size_summary;
/// use pagesize_core::SizeReport;
///
/// print_size_summary(&SizeReport::default());
/// ```
pub fn print_size_summary(report: &SizeReport) {
    let term = Term::stderr();
    let width = (term.size().1 as usize).min(80);

    eprintln!("\n{}", paint("Page Sizes", Style::new().bold().underline()));
    eprintln!("{}", "─".repeat(width));

    let mut lines = summary_lines(report);
    let total = lines.pop().unwrap_or_default();
    for line in lines {
        eprintln!("  {} {}", paint("▸", Style::new().blue()), line);
    }

    eprintln!("{}", "─".repeat(width));
    eprintln!("    {}", paint(&total, Style::new().green().bold()));

    if let Some(page) = report.largest(PageKind::Client) {
        eprintln!(
            "    Largest page: {} ({} gzipped)",
            paint(&page.page, Style::new().bold()),
            format_kb(page.total_gzipped_size)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagesize_core::{PageSizeReport, SizedBundle};

    fn page(route: &str, kind: PageKind, size: f64, gzipped: f64) -> PageSizeReport {
        PageSizeReport::from_bundles(
            route,
            kind,
            vec![SizedBundle {
                file: format!("{route}.js"),
                file_size: size,
                gzipped_file_size: gzipped,
            }],
        )
    }

    #[test]
    fn test_format_kb() {
        assert_eq!(format_kb(0.0), "0.00 KB");
        assert_eq!(format_kb(0.98), "0.98 KB");
        assert_eq!(format_kb(1023.99), "1023.99 KB");
        assert_eq!(format_kb(1024.0), "1.00 MB");
    }

    #[test]
    fn test_summary_lines() {
        let report = SizeReport::new(vec![
            page("/", PageKind::Client, 2.0, 0.5),
            page("/about", PageKind::Serverless, 4.0, 1.25),
        ]);

        let lines = summary_lines(&report);

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("/ "));
        assert!(lines[0].contains("2.00 KB"));
        assert!(lines[1].starts_with("/about (serverless)"));
        assert!(lines[1].contains("1.25 KB gzipped"));
        assert!(lines[2].starts_with("Total"));
        assert!(lines[2].contains("6.00 KB"));
        assert!(lines[2].contains("1.75 KB gzipped"));
    }

    #[test]
    fn test_summary_lines_empty_report() {
        let lines = summary_lines(&SizeReport::default());
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Total"));
    }

    #[test]
    fn test_print_size_summary() {
        // Should not panic
        print_size_summary(&SizeReport::new(vec![page("/", PageKind::Client, 1.0, 0.5)]));
        print_size_summary(&SizeReport::default());
    }
}
