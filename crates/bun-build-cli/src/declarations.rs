//! Type declaration emission through tsc.

use crate::error::{BuildError, Result};
use crate::ui;
use crate::utils::resolve_path;
use async_trait::async_trait;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

/// Emits `.d.ts` files for a source directory into an output directory.
#[async_trait]
pub trait DeclarationEmitter: Send + Sync {
    async fn emit(&self, src: &Path, out: &Path) -> Result<()>;
}

/// The project's own TypeScript compiler, `node_modules/.bin/tsc`.
#[derive(Debug, Clone)]
pub struct Tsc {
    program: PathBuf,
    cwd: PathBuf,
}

impl Tsc {
    /// Use the tsc installed in `cwd`'s `node_modules`.
    pub fn for_project(cwd: impl Into<PathBuf>) -> Self {
        let cwd = cwd.into();
        Self {
            program: cwd.join("node_modules").join(".bin").join("tsc"),
            cwd,
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

#[async_trait]
impl DeclarationEmitter for Tsc {
    /// Run `tsc --emitDeclarationOnly --outDir <out>` from inside `src`.
    ///
    /// Both paths are resolved against the project directory. tsc's stdout
    /// and stderr are forwarded as-is once it exits.
    async fn emit(&self, src: &Path, out: &Path) -> Result<()> {
        let package_dir = resolve_path(src, &self.cwd);
        let output_path = resolve_path(out, &self.cwd);

        ui::info("Building TypeScript...");
        tracing::debug!(
            program = %self.program.display(),
            cwd = %package_dir.display(),
            "Running tsc --emitDeclarationOnly --outDir {}",
            output_path.display()
        );

        let output = Command::new(&self.program)
            .arg("--emitDeclarationOnly")
            .arg("--outDir")
            .arg(&output_path)
            .current_dir(&package_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| BuildError::TscSpawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.stdout.is_empty() {
            std::io::stdout().write_all(&output.stdout)?;
        }
        if !output.stderr.is_empty() {
            std::io::stderr().write_all(&output.stderr)?;
        }

        if !output.status.success() {
            return Err(BuildError::TscFailed(output.status.code().unwrap_or(-1)).into());
        }

        ui::success("TypeScript completed");
        Ok(())
    }
}
