//! Terminal UI utilities for status messages and the size summary.
//!
//! All output goes to stderr so stdout stays free for the commands being run
//! and for workflow commands understood by the CI runner.
//!
//! # Examples
//!
//! ```no_run
//! use pagesize_cli::ui;
//!
//! ui::init_colors(false);
//! ui::info("Sizing pages...");
//! ui::success("Done");
//! ```

mod format;
mod messages;

use owo_colors::{OwoColorize, Style};
use std::sync::atomic::{AtomicBool, Ordering};

pub use format::{format_kb, print_size_summary, summary_lines};
pub use messages::{info, success, warning};

static COLORS_ENABLED: AtomicBool = AtomicBool::new(true);

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR environment variables, falls back to
/// terminal capability detection.
pub fn should_use_color() -> bool {
    // NO_COLOR environment variable disables colors
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // FORCE_COLOR enables colors even in non-TTY
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::user_attended_stderr()
}

/// Initialize color support based on `--no-color` and the environment.
///
/// Should be called early in main.
pub fn init_colors(no_color: bool) {
    COLORS_ENABLED.store(!no_color && should_use_color(), Ordering::Relaxed);
}

pub(crate) fn colors_enabled() -> bool {
    COLORS_ENABLED.load(Ordering::Relaxed)
}

/// Apply `style` to `text` if colors are enabled.
pub(crate) fn paint(text: &str, style: Style) -> String {
    if colors_enabled() {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}
