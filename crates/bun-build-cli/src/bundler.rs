//! The external bundler.
//!
//! [`BundleConfig`] is what gets built; [`Bundler`] is whatever builds it.
//! Production builds go through [`BunBundler`], which runs `bun build` as a
//! subprocess and reports its exit status and output lines.

use crate::config::{BuildOptions, Format, Mode, SourceMapMode, Target};
use crate::error::{BuildError, Result};
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;

/// Build configuration handed to the bundler.
#[derive(Debug, Clone, PartialEq)]
pub struct BundleConfig {
    pub root: PathBuf,
    pub entrypoints: Vec<PathBuf>,
    pub outdir: PathBuf,
    pub naming: String,
    pub external: Vec<String>,
    pub format: Format,
    pub splitting: bool,
    pub sourcemap: SourceMapMode,
    pub minify: bool,
    pub target: Target,
}

impl BundleConfig {
    /// Build the configuration from resolved options.
    ///
    /// Presets override the raw options: library mode always produces
    /// unminified node output, bundle mode always produces minified browser
    /// output. Without a preset the raw `minify` and `target` apply.
    pub fn from_options(options: &BuildOptions, entrypoints: Vec<PathBuf>) -> Self {
        let (minify, target) = match options.mode {
            Some(Mode::Lib) => (false, Target::Node),
            Some(Mode::Bundle) => (true, Target::Browser),
            None => (options.minify, options.target),
        };

        Self {
            root: options.src.clone(),
            entrypoints,
            outdir: options.out.clone(),
            naming: options.naming.clone(),
            external: options.external.clone(),
            format: options.format,
            splitting: options.splitting,
            sourcemap: options.sourcemap,
            minify,
            target,
        }
    }

    /// Arguments for `bun build`.
    pub fn to_args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["build".into()];
        args.extend(self.entrypoints.iter().map(|e| e.as_os_str().to_owned()));

        args.push("--root".into());
        args.push(self.root.as_os_str().to_owned());
        args.push("--outdir".into());
        args.push(self.outdir.as_os_str().to_owned());
        args.push("--entry-naming".into());
        args.push(self.naming.clone().into());
        args.push("--format".into());
        args.push(self.format.as_str().into());
        args.push("--target".into());
        args.push(self.target.as_str().into());
        args.push(format!("--sourcemap={}", self.sourcemap.as_str()).into());

        if self.splitting {
            args.push("--splitting".into());
        }
        if self.minify {
            args.push("--minify".into());
        }
        for pattern in &self.external {
            args.push("--external".into());
            args.push(pattern.into());
        }

        args
    }
}

/// What the bundler reported: success plus its diagnostic lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BundleOutcome {
    pub success: bool,
    pub logs: Vec<String>,
}

/// An engine that compiles a [`BundleConfig`].
///
/// Returning `Ok` with `success: false` means the bundler ran and rejected
/// the build; `Err` means it could not be run at all.
#[async_trait]
pub trait Bundler: Send + Sync {
    async fn bundle(&self, config: &BundleConfig) -> Result<BundleOutcome>;
}

/// Runs `bun build` in the project directory.
#[derive(Debug, Clone)]
pub struct BunBundler {
    program: PathBuf,
    cwd: PathBuf,
}

impl BunBundler {
    pub fn new(program: impl Into<PathBuf>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            cwd: cwd.into(),
        }
    }
}

#[async_trait]
impl Bundler for BunBundler {
    async fn bundle(&self, config: &BundleConfig) -> Result<BundleOutcome> {
        let args = config.to_args();
        tracing::debug!(
            program = %self.program.display(),
            cwd = %self.cwd.display(),
            "Running {:?}",
            args
        );

        let output = Command::new(&self.program)
            .args(&args)
            .current_dir(&self.cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| BuildError::BundlerSpawn {
                program: self.program.clone(),
                source,
            })?;

        let mut logs = collect_lines(&output.stdout);
        logs.extend(collect_lines(&output.stderr));

        for line in &logs {
            tracing::debug!("bun: {}", line);
        }

        Ok(BundleOutcome {
            success: output.status.success(),
            logs,
        })
    }
}

fn collect_lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}
