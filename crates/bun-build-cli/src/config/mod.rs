//! Build options: caller-facing partial options, layered loading, and
//! resolution into a fully populated [`BuildOptions`].
//!
//! Loading merges settings from CLI args, environment variables, and
//! `bun-build.config.json`. Priority: CLI > Environment > File > Defaults.

mod defaults;
mod loading;
mod resolve;
mod types;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use defaults::*;
pub use loading::CONFIG_FILE_NAME;
pub use types::*;

/// Options as callers supply them. Every field is optional.
///
/// This is the shape of `bun-build.config.json`, of `BUN_BUILD_*` environment
/// variables, and of the library entry point [`crate::bun_build`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PartialOptions {
    /// Build preset: "lib" or "bundle"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    /// Library preset selector (same as mode: "lib")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lib: Option<bool>,

    /// Bundle preset selector (same as mode: "bundle")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle: Option<bool>,

    /// Target environment, used only when no preset is selected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Target>,

    /// Source directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<PathBuf>,

    /// Glob patterns (relative to `src`) excluded from entry discovery
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore: Option<Patterns>,

    /// Output directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out: Option<PathBuf>,

    /// Emit type declarations with tsc
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tsc: Option<bool>,

    /// Output file naming pattern
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub naming: Option<String>,

    /// Module format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,

    /// Code splitting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub splitting: Option<bool>,

    /// Packages left out of the bundle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external: Option<Patterns>,

    /// Source map mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sourcemap: Option<SourceMapMode>,

    /// Minification, used only when no preset is selected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minify: Option<bool>,

    /// Path to the bun executable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bun_bin: Option<PathBuf>,
}

/// Fully resolved options. Produced by [`PartialOptions::resolve`].
#[derive(Debug, Clone, PartialEq)]
pub struct BuildOptions {
    pub mode: Option<Mode>,
    pub target: Target,
    pub src: PathBuf,
    pub ignore: Vec<String>,
    pub out: PathBuf,
    pub tsc: bool,
    pub naming: String,
    pub format: Format,
    pub splitting: bool,
    pub external: Vec<String>,
    pub sourcemap: SourceMapMode,
    pub minify: bool,
    pub bun_bin: PathBuf,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            mode: None,
            target: default_target(),
            src: default_src(),
            ignore: Vec::new(),
            out: default_out(),
            tsc: default_tsc(),
            naming: default_naming(),
            format: default_format(),
            splitting: default_splitting(),
            external: default_external(),
            sourcemap: default_sourcemap(),
            minify: default_minify(),
            bun_bin: default_bun_bin(),
        }
    }
}
