//! bun-build - build a TypeScript package with Bun.
//!
//! A thin driver around two external tools. It empties the output directory,
//! bundles every `.ts` file under the source directory with `bun build`, then
//! emits type declarations with the project's `tsc`.
//!
//! # Architecture
//!
//! - [`config`] - Partial options, layered loading, resolution and defaults
//! - [`clean`] - Output directory cleaning
//! - [`discovery`] - Entry point discovery
//! - [`manifest`] - `package.json` name and version
//! - [`bundler`] - Bundle configuration and the `bun build` subprocess
//! - [`builder`] - Package building and status reporting
//! - [`declarations`] - Declaration emission through `tsc`
//! - [`orchestrator`] - The clean, build, declare sequence
//! - [`cli`], [`logger`], [`ui`], [`error`] - The binary's surface
//!
//! # Example
//!
//! ```no_run
//! use bun_build::{bun_build, PartialOptions};
//! use std::path::Path;
//!
//! # async fn example() -> bun_build::Result<()> {
//! let options = PartialOptions {
//!     lib: Some(true),
//!     ..PartialOptions::default()
//! };
//! bun_build(options, Path::new(".")).await?;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod bundler;
pub mod clean;
pub mod cli;
pub mod config;
pub mod declarations;
pub mod discovery;
pub mod error;
pub mod logger;
pub mod manifest;
pub mod orchestrator;
pub mod ui;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use builder::PackageBuild;
pub use config::{BuildOptions, PartialOptions};
pub use error::{BuildError, CliError, ConfigError, Result, ResultExt};
pub use orchestrator::bun_build;
