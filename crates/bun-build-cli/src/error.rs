//! Error types for bun-build.
//!
//! The hierarchy mirrors the three ways a build can go wrong:
//! - **Configuration errors** (`ConfigError`): conflicting mode flags, unknown
//!   mode values, malformed config files
//! - **Build errors** (`BuildError`): nothing to build, a broken `package.json`,
//!   or one of the delegated tools (bun, tsc) failing
//! - **Top-level errors** (`CliError`): everything above plus raw I/O
//!
//! Every error is terminal. Nothing is retried; `main` renders the error
//! through miette and exits with status 1.
//!
//! # Example
//!
//! ```rust,no_run
//! use bun_build::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_manifest(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path)
//!         .with_path(path)
//!         .with_hint("Run bun-build from the package root")
//! }
//! ```

mod report;

pub use report::cli_error_to_miette;

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type returned by every build step.
#[derive(Debug, Error)]
pub enum CliError {
    /// Option resolution or config loading failed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Discovery or a delegated tool failed
    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

/// Errors raised while turning caller input into resolved build options.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Mutually exclusive options were specified
    #[error("Conflicting options: {0}\n\nHint: These options cannot be used together")]
    ConflictingOptions(String),

    /// Invalid value for a configuration option
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The invalid value
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },

    /// The config file or environment could not be merged into options
    #[error("Failed to load configuration: {0}\n\nHint: Check bun-build.config.json syntax and field types")]
    Load(String),
}

/// Errors raised while discovering sources or running bun/tsc.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The source directory holds no buildable `.ts` files
    #[error("No .ts files found in {}\n\nHint: Check --src and --ignore", .0.display())]
    NoSourceFiles(PathBuf),

    /// An inclusion or exclusion glob could not be compiled
    #[error("Invalid glob pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        /// Parser message from globset
        reason: String,
    },

    /// `package.json` is absent from the working directory
    #[error("package.json not found: {}\n\nHint: Run bun-build from the package root", .0.display())]
    ManifestNotFound(PathBuf),

    /// `package.json` exists but is not valid JSON
    #[error("Failed to parse {}: {reason}", .path.display())]
    ManifestInvalid {
        /// Manifest location
        path: PathBuf,
        /// Parser message
        reason: String,
    },

    /// `package.json` lacks the `name` or `version` field
    #[error("package.json is missing a {0} field.")]
    ManifestMissingField(&'static str),

    /// The bundler executable could not be started
    #[error("Failed to run bundler '{}': {source}\n\nHint: Install bun or point --bun-bin at it", .program.display())]
    BundlerSpawn {
        /// Program that was executed
        program: PathBuf,
        /// Underlying spawn error
        #[source]
        source: std::io::Error,
    },

    /// The bundler ran and reported failure.
    ///
    /// The logs were already printed while the build ran, so the message
    /// only counts them.
    #[error("bun build rejected {package} ({})", diagnostic_count(.logs))]
    BundlerFailed {
        /// `<name> v<version>` of the package being built
        package: String,
        /// Diagnostics reported by the bundler, verbatim
        logs: Vec<String>,
    },

    /// The type-checker executable could not be started
    #[error("Failed to run tsc '{}': {source}\n\nHint: Install typescript as a dev dependency or pass --no-tsc", .program.display())]
    TscSpawn {
        /// Program that was executed
        program: PathBuf,
        /// Underlying spawn error
        #[source]
        source: std::io::Error,
    },

    /// The type-checker exited with a non-zero status
    #[error("tsc exited with code {0}")]
    TscFailed(i32),
}

fn diagnostic_count(logs: &[String]) -> String {
    match logs.len() {
        1 => "1 diagnostic".to_string(),
        n => format!("{} diagnostics", n),
    }
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Turn a `NotFound` I/O error into [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Append a hint to the error message.
    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T>;

    /// Prefix the error message with `msg`.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            match err {
                CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                    CliError::FileNotFound(path.as_ref().to_path_buf())
                }
                other => other,
            }
        })
    }

    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}\n\nHint: {}", err, hint))
        })
    }

    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}
