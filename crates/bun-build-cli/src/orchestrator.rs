//! The clean → build → declare sequence.

use crate::builder::{self, PackageBuild};
use crate::bundler::{BunBundler, Bundler};
use crate::clean;
use crate::config::{BuildOptions, PartialOptions};
use crate::declarations::{DeclarationEmitter, Tsc};
use crate::error::Result;
use crate::ui;
use crate::utils::resolve_path;
use std::path::Path;

/// Run a full build of the package in `cwd`.
///
/// Steps run strictly one after another:
///
/// 1. Empty the output directory
/// 2. Build the package with `bundler`
/// 3. Emit declarations with `emitter` when `options.tsc` is set
///
/// Any failure is logged as `Build failed: <error>` and returned unchanged;
/// later steps do not run.
pub async fn run(
    options: &BuildOptions,
    cwd: &Path,
    bundler: &dyn Bundler,
    emitter: &dyn DeclarationEmitter,
) -> Result<PackageBuild> {
    let result = run_steps(options, cwd, bundler, emitter).await;
    if let Err(err) = &result {
        tracing::error!("Build failed: {}", err);
    }
    result
}

async fn run_steps(
    options: &BuildOptions,
    cwd: &Path,
    bundler: &dyn Bundler,
    emitter: &dyn DeclarationEmitter,
) -> Result<PackageBuild> {
    let out_dir = resolve_path(&options.out, cwd);
    clean::clean_output_dir(&out_dir).await?;
    ui::info(&format!(
        "Cleared output directory: {}",
        options.out.display()
    ));

    let build = builder::build_package(options, cwd, bundler).await?;

    if options.tsc {
        emitter.emit(&options.src, &options.out).await?;
    } else {
        tracing::debug!("Declaration emission disabled");
    }

    Ok(build)
}

/// Resolve `options` and build the package in `cwd` with `bun` and the
/// project's `tsc`.
///
/// # Example
///
/// ```no_run
/// use bun_build::{bun_build, PartialOptions};
/// use std::path::Path;
///
/// # async fn example() -> bun_build::Result<()> {
/// let options = PartialOptions {
///     bundle: Some(true),
///     tsc: Some(false),
///     ..PartialOptions::default()
/// };
/// let build = bun_build(options, Path::new("./my-package")).await?;
/// println!("built {}", build.package);
/// # Ok(())
/// # }
/// ```
pub async fn bun_build(options: PartialOptions, cwd: &Path) -> Result<PackageBuild> {
    let options = match options.resolve() {
        Ok(options) => options,
        Err(err) => {
            tracing::error!("Build failed: {}", err);
            return Err(err);
        }
    };

    let bundler = BunBundler::new(&options.bun_bin, cwd);
    let emitter = Tsc::for_project(cwd);
    run(&options, cwd, &bundler, &emitter).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{BuildError, CliError, ConfigError};
    use crate::test_utils::{write_manifest, write_sources, RecordingBundler, RecordingEmitter};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn project() -> TempDir {
        let temp = TempDir::new().unwrap();
        write_manifest(temp.path(), "pkg", "1.2.3");
        write_sources(&temp.path().join("src"), &["index.ts"]);
        temp
    }

    #[tokio::test]
    async fn test_emits_declarations_when_enabled() {
        let temp = project();
        let bundler = RecordingBundler::succeeding();
        let emitter = RecordingEmitter::succeeding();

        run(&BuildOptions::default(), temp.path(), &bundler, &emitter)
            .await
            .unwrap();

        assert_eq!(
            emitter.calls(),
            vec![(PathBuf::from("./src"), PathBuf::from("./out"))]
        );
    }

    #[tokio::test]
    async fn test_skips_declarations_when_disabled() {
        let temp = project();
        let bundler = RecordingBundler::succeeding();
        let emitter = RecordingEmitter::succeeding();
        let options = BuildOptions {
            tsc: false,
            ..BuildOptions::default()
        };

        run(&options, temp.path(), &bundler, &emitter).await.unwrap();

        assert_eq!(bundler.call_count(), 1);
        assert!(emitter.calls().is_empty());
    }

    #[tokio::test]
    async fn test_emitter_failure_fails_run() {
        let temp = project();
        let bundler = RecordingBundler::succeeding();
        let emitter = RecordingEmitter::exiting_with(2);

        let err = run(&BuildOptions::default(), temp.path(), &bundler, &emitter)
            .await
            .unwrap_err();

        assert!(matches!(err, CliError::Build(BuildError::TscFailed(2))));
    }

    #[tokio::test]
    async fn test_bundler_failure_skips_declarations() {
        let temp = project();
        let bundler = RecordingBundler::failing(vec!["error: boom".to_string()]);
        let emitter = RecordingEmitter::succeeding();

        let err = run(&BuildOptions::default(), temp.path(), &bundler, &emitter)
            .await
            .unwrap_err();

        assert!(matches!(err, CliError::Build(BuildError::BundlerFailed { .. })));
        assert!(emitter.calls().is_empty());
    }

    #[tokio::test]
    async fn test_cleans_previous_output_first() {
        let temp = project();
        let stale = temp.path().join("out/old/stale.mjs");
        std::fs::create_dir_all(stale.parent().unwrap()).unwrap();
        std::fs::write(&stale, "").unwrap();

        let bundler = RecordingBundler::succeeding();
        let emitter = RecordingEmitter::succeeding();
        run(&BuildOptions::default(), temp.path(), &bundler, &emitter)
            .await
            .unwrap();

        assert!(!temp.path().join("out/old").exists());
        assert!(temp.path().join("out").is_dir());
    }

    #[tokio::test]
    async fn test_conflicting_modes_fail_before_building() {
        let temp = project();
        let options = PartialOptions {
            lib: Some(true),
            bundle: Some(true),
            bun_bin: Some(PathBuf::from("/nonexistent/bun-build-test/bun")),
            ..PartialOptions::default()
        };

        let err = bun_build(options, temp.path()).await.unwrap_err();
        assert!(matches!(
            err,
            CliError::Config(ConfigError::ConflictingOptions(_))
        ));
    }
}
