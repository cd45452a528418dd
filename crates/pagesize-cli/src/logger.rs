//! Logging infrastructure for the pagesize CLI.
//!
//! Per-file and per-page size lines are emitted as `tracing` events by
//! `pagesize-core`; this module installs the subscriber that prints them.
//!
//! # Example
//!
//! ```rust,no_run
//! use pagesize_cli::logger::init_logger;
//! use tracing::info;
//!
//! init_logger(false, false, false);
//! info!("Sizing pages");
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used by `--verbose`.
pub const VERBOSE_FILTER: &str = "pagesize=debug,pagesize_core=debug,pagesize_cli=debug";

/// Filter used by `--quiet`.
pub const QUIET_FILTER: &str = "pagesize=error,pagesize_core=error,pagesize_cli=error";

/// Filter used when neither flag nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "pagesize=info,pagesize_core=info,pagesize_cli=info";

/// Initialize the tracing subscriber with the specified options.
///
/// Call once at startup, before any logging occurs.
///
/// The logging level is determined in this order:
/// 1. `--verbose` flag: DEBUG for pagesize crates
/// 2. `--quiet` flag: ERROR only
/// 3. `RUST_LOG` environment variable
/// 4. Default: INFO for pagesize crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(filter_for(verbose, quiet), no_color);
}

/// Initialize logger with custom environment filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_target(false) // Don't show the module path (keeps output clean)
        .with_level(true)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // tracing is global and can only be initialized once per process, so
    // these only exercise filter construction.

    #[test]
    fn test_verbose_filter() {
        let filter = filter_for(true, false);
        assert!(filter.to_string().contains("pagesize_core=debug"));
    }

    #[test]
    fn test_quiet_filter() {
        let filter = filter_for(false, true);
        assert!(filter.to_string().contains("pagesize=error"));
    }

    #[test]
    fn test_verbose_wins_over_quiet() {
        let filter = filter_for(true, true);
        assert!(filter.to_string().contains("debug"));
    }
}
