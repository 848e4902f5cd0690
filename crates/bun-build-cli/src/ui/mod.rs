//! Terminal output for build status.
//!
//! Status lines (`✓`, `ℹ`, `⚠`, `✗`) go to stderr so stdout stays free for
//! the output forwarded from tsc. Colors follow `--no-color`, `NO_COLOR`,
//! `FORCE_COLOR` and terminal detection.
//!
//! # Examples
//!
//! ```no_run
//! use bun_build::ui;
//!
//! ui::init_colors(false);
//!
//! let spinner = ui::Spinner::new("Bundling 3 entry points...");
//! spinner.finish("Bundled");
//!
//! ui::success("pkg v1.2.3 build successful");
//! ```

mod format;
mod messages;
mod spinner;

pub use format::format_duration;
pub use messages::{error, info, log_line, success, warning};
pub use spinner::Spinner;

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR environment variables, falls back to
/// terminal capability detection.
pub fn should_use_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::user_attended_stderr()
}

/// Initialize color support. Call once, early in `main`.
///
/// `no_color` comes from the `--no-color` flag and wins over the environment.
pub fn init_colors(no_color: bool) {
    let enabled = !no_color && should_use_color();
    owo_colors::set_override(enabled);
    console::set_colors_enabled_stderr(enabled);
}
