//! Status message functions for terminal output.

use owo_colors::{OwoColorize, Stream::Stderr, Style};

/// Print a success message to stderr.
///
/// # Examples
///
/// ```no_run
/// use bun_build::ui::success;
///
/// success("pkg v1.2.3 build successful");
/// ```
pub fn success(message: &str) {
    eprintln!(
        "{} {}",
        "✓".if_supports_color(Stderr, |t| t.style(Style::new().green().bold())),
        message
    );
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    eprintln!(
        "{} {}",
        "ℹ".if_supports_color(Stderr, |t| t.style(Style::new().blue().bold())),
        message
    );
}

/// Print a warning message to stderr.
pub fn warning(message: &str) {
    eprintln!(
        "{} {}",
        "⚠".if_supports_color(Stderr, |t| t.style(Style::new().yellow().bold())),
        message.if_supports_color(Stderr, |t| t.yellow())
    );
}

/// Print an error message to stderr.
///
/// # Examples
///
/// ```no_run
/// use bun_build::ui::error;
///
/// error("pkg v1.2.3 build failed");
/// ```
pub fn error(message: &str) {
    eprintln!(
        "{} {}",
        "✗".if_supports_color(Stderr, |t| t.style(Style::new().red().bold())),
        message.if_supports_color(Stderr, |t| t.red())
    );
}

/// Print one line of tool output (bundler diagnostics), indented and unstyled.
pub fn log_line(line: &str) {
    eprintln!("  {}", line);
}
