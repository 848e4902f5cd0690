//! Test doubles for the bundler and declaration emitter.

use crate::bundler::{BundleConfig, BundleOutcome, Bundler};
use crate::declarations::DeclarationEmitter;
use crate::error::{BuildError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Bundler that records every config it receives and returns a canned outcome.
pub struct RecordingBundler {
    outcome: BundleOutcome,
    calls: Mutex<Vec<BundleConfig>>,
}

impl RecordingBundler {
    pub fn succeeding() -> Self {
        Self {
            outcome: BundleOutcome {
                success: true,
                logs: Vec::new(),
            },
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(logs: Vec<String>) -> Self {
        Self {
            outcome: BundleOutcome {
                success: false,
                logs,
            },
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_config(&self) -> Option<BundleConfig> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Bundler for RecordingBundler {
    async fn bundle(&self, config: &BundleConfig) -> Result<BundleOutcome> {
        self.calls.lock().unwrap().push(config.clone());
        Ok(self.outcome.clone())
    }
}

/// Emitter that records its calls and optionally fails with an exit code.
pub struct RecordingEmitter {
    exit_code: Option<i32>,
    calls: Mutex<Vec<(PathBuf, PathBuf)>>,
}

impl RecordingEmitter {
    pub fn succeeding() -> Self {
        Self {
            exit_code: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn exiting_with(code: i32) -> Self {
        Self {
            exit_code: Some(code),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(PathBuf, PathBuf)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DeclarationEmitter for RecordingEmitter {
    async fn emit(&self, src: &Path, out: &Path) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push((src.to_path_buf(), out.to_path_buf()));
        match self.exit_code {
            Some(code) => Err(BuildError::TscFailed(code).into()),
            None => Ok(()),
        }
    }
}

pub fn write_manifest(dir: &Path, name: &str, version: &str) {
    std::fs::write(
        dir.join("package.json"),
        format!(r#"{{ "name": "{}", "version": "{}" }}"#, name, version),
    )
    .unwrap();
}

pub fn write_sources(src: &Path, files: &[&str]) {
    for file in files {
        let path = src.join(file);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "export const value = 1;\n").unwrap();
    }
}
