//! Command-line interface definition for bun-build.
//!
//! A single flat command: every flag maps onto a field of
//! [`PartialOptions`], and only flags the user actually passed are forwarded
//! to config loading so they override the config file and environment.

mod tests;

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Format, PartialOptions, Patterns, SourceMapMode, Target};

/// bun-build - build a TypeScript package with Bun
#[derive(Parser, Debug)]
#[command(
    name = "bun-build",
    version,
    about = "Build a TypeScript package with Bun",
    long_about = "Cleans the output directory, bundles every .ts file under the source\n\
                  directory with `bun build`, then emits type declarations with tsc.",
    after_help = "Bun bundler docs: https://bun.com/docs/bundler"
)]
pub struct Cli {
    /// Build in library mode: no minification, node target (default)
    #[arg(long, conflicts_with = "bundle")]
    pub lib: bool,

    /// Build in bundle mode: minified, browser target
    #[arg(long)]
    pub bundle: bool,

    /// The intended execution environment (default: bun)
    ///
    /// Only applies when neither --lib nor --bundle is in effect.
    #[arg(long, value_enum, value_name = "TARGET")]
    pub target: Option<Target>,

    /// Package source directory (default: ./src)
    #[arg(long, value_name = "DIR")]
    pub src: Option<PathBuf>,

    /// Glob (relative to --src) of files to leave out; repeatable
    #[arg(long, value_name = "GLOB")]
    pub ignore: Vec<String>,

    /// Output directory (default: ./out)
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Emit type declarations with tsc (default)
    #[arg(long, overrides_with = "no_tsc")]
    pub tsc: bool,

    /// Skip type declaration emission
    #[arg(long, overrides_with = "tsc")]
    pub no_tsc: bool,

    /// Generated file name pattern (default: "[dir]/[name].mjs")
    #[arg(long, value_name = "PATTERN")]
    pub naming: Option<String>,

    /// Module format of the generated files (default: esm)
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<Format>,

    /// Enable code splitting (default: true)
    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub splitting: Option<bool>,

    /// External dependencies; repeatable or comma-separated (default: "*")
    #[arg(long, value_name = "PATTERN", value_delimiter = ',')]
    pub external: Vec<String>,

    /// Type of sourcemap to generate (default: none)
    #[arg(long, value_enum, value_name = "MODE")]
    pub sourcemap: Option<SourceMapMode>,

    /// Enable minification (default: false)
    ///
    /// Ignored by --lib and --bundle, which fix minification themselves.
    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub minify: Option<bool>,

    /// Path to bun-build.config.json
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Path to the bun executable (default: bun on PATH)
    #[arg(long, value_name = "PATH")]
    pub bun_bin: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// The options the user passed explicitly.
    pub fn to_partial_options(&self) -> PartialOptions {
        let tsc = if self.no_tsc {
            Some(false)
        } else if self.tsc {
            Some(true)
        } else {
            None
        };

        PartialOptions {
            mode: None,
            lib: self.lib.then_some(true),
            bundle: self.bundle.then_some(true),
            target: self.target,
            src: self.src.clone(),
            ignore: non_empty(&self.ignore),
            out: self.out.clone(),
            tsc,
            naming: self.naming.clone(),
            format: self.format,
            splitting: self.splitting,
            external: non_empty(&self.external),
            sourcemap: self.sourcemap,
            minify: self.minify,
            bun_bin: self.bun_bin.clone(),
        }
    }
}

fn non_empty(values: &[String]) -> Option<Patterns> {
    (!values.is_empty()).then(|| Patterns::Many(values.to_vec()))
}
