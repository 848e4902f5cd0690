//! Logging setup for the bun-build CLI.
//!
//! Status lines meant for the user go through [`crate::ui`]; `tracing` carries
//! the diagnostic detail (resolved options, spawned commands, bundler output)
//! that only shows up with `--verbose` or `RUST_LOG`.
//!
//! # Example
//!
//! ```rust,no_run
//! use bun_build::logger::init_logger;
//! use tracing::{debug, info};
//!
//! init_logger(false, false, false);
//!
//! info!("Starting build");
//! debug!("Entry point: {}", "src/index.ts");
//! ```

use crate::ui;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str = "bun_build=debug";
const QUIET_FILTER: &str = "bun_build=error";
const DEFAULT_FILTER: &str = "bun_build=warn";

/// Initialize the tracing subscriber.
///
/// Call once at the start of the program, before any logging occurs.
///
/// The filter is chosen in this order:
/// 1. `--verbose`: DEBUG for this crate
/// 2. `--quiet`: ERROR only
/// 3. `RUST_LOG` environment variable
/// 4. Default: WARN for this crate
///
/// ANSI colors follow the same rules as the status lines in [`crate::ui`]:
/// off with `no_color` or `NO_COLOR`, on with `FORCE_COLOR` or a terminal.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(select_filter(verbose, quiet), no_color);
}

/// Initialize logger with custom environment filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(use_ansi(no_color))
        .compact();

    // try_init: a second initialization (tests, library callers) is not an error
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn use_ansi(no_color: bool) -> bool {
    !no_color && ui::should_use_color()
}

fn select_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}
