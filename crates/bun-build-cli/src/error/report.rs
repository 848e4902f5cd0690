//! Miette diagnostic conversion for CLI errors.

use crate::error::{BuildError, CliError};
use miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Build(e) => build_error_to_miette(e),
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        _ => miette::miette!("{}", err),
    }
}

/// Convert BuildError to miette Report
pub fn build_error_to_miette(err: BuildError) -> Report {
    match err {
        err @ BuildError::BundlerFailed { .. } => {
            miette::miette!(help = "See the bundler output above", "{}", err)
        }
        BuildError::TscFailed(code) => miette::miette!(
            help = "Run tsc --emitDeclarationOnly in the source directory to see the full report",
            "tsc exited with code {}",
            code
        ),
        _ => miette::miette!("{}", err),
    }
}
