//! Shared fixtures: a temporary package with fake `bun` and `tsc` executables.
//!
//! The fakes are shell scripts that record their arguments next to the
//! package, so these fixtures are unix only.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Fake bun that records one argument per line and succeeds.
pub const BUN_OK: &str = r#"printf '%s\n' "$@" > bun-args"#;

/// Fake bun that reports a syntax error and fails.
pub const BUN_FAIL: &str = r#"printf '%s\n' "$@" > bun-args
echo "error: Unexpected token" >&2
exit 1"#;

/// Fake tsc that records its arguments and succeeds.
pub const TSC_OK: &str = r#"printf '%s\n' "$@" > ../tsc-args"#;

/// Fake tsc that fails the way a type error does.
pub const TSC_FAIL: &str = r#"echo "src/index.ts(1,1): error TS2322"
exit 2"#;

pub struct Project {
    pub dir: TempDir,
}

impl Project {
    /// A package `pkg` version `1.2.3` with the given sources under `src`.
    pub fn new(sources: &[&str]) -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{ "name": "pkg", "version": "1.2.3" }"#,
        )
        .unwrap();

        let project = Self { dir };
        fs::create_dir_all(project.path().join("src")).unwrap();
        for source in sources {
            project.write(&format!("src/{}", source), "export const value = 1;\n");
        }
        project.install_bun(BUN_OK);
        project.install_tsc(TSC_OK);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, relative: &str, contents: &str) {
        let path = self.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    pub fn bun_path(&self) -> PathBuf {
        self.path().join("bin").join("bun")
    }

    pub fn install_bun(&self, script: &str) {
        install_script(&self.bun_path(), script);
    }

    pub fn install_tsc(&self, script: &str) {
        install_script(&self.path().join("node_modules/.bin/tsc"), script);
    }

    /// `bun-build` run inside the package with the fake bun.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_bun-build"));
        cmd.current_dir(self.path())
            .env("BUN_BUILD_BUN_BIN", self.bun_path())
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        cmd
    }

    /// Arguments the fake bun received, if it ran.
    pub fn bun_args(&self) -> Option<Vec<String>> {
        read_lines(&self.path().join("bun-args"))
    }

    /// Arguments the fake tsc received, if it ran.
    pub fn tsc_args(&self) -> Option<Vec<String>> {
        read_lines(&self.path().join("tsc-args"))
    }
}

/// Value following `flag` in an argument list.
pub fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn install_script(path: &Path, script: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, format!("#!/bin/sh\n{}\n", script)).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

fn read_lines(path: &Path) -> Option<Vec<String>> {
    fs::read_to_string(path)
        .ok()
        .map(|content| content.lines().map(str::to_string).collect())
}
