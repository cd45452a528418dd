//! One-line status messages on stderr.

use super::paint;
use owo_colors::Style;

fn status(marker: &str, marker_style: Style, message: &str, message_style: Option<Style>) {
    let message = match message_style {
        Some(style) => paint(message, style),
        None => message.to_string(),
    };
    eprintln!("{} {}", paint(marker, marker_style.bold()), message);
}

/// A pipeline step finished.
pub fn success(message: &str) {
    status("✓", Style::new().green(), message, None);
}

/// A pipeline step is starting.
pub fn info(message: &str) {
    status("ℹ", Style::new().blue(), message, None);
}

pub fn warning(message: &str) {
    status("⚠", Style::new().yellow(), message, Some(Style::new().yellow()));
}
