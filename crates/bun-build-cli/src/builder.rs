//! Package building: discover entry points, read the manifest, run the
//! bundler, report the result.

use crate::bundler::{BundleConfig, Bundler};
use crate::config::BuildOptions;
use crate::discovery;
use crate::error::{BuildError, Result};
use crate::manifest::PackageMetadata;
use crate::ui;
use crate::utils::resolve_path;
use std::path::Path;

/// What a successful build produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageBuild {
    pub package: PackageMetadata,
    pub entrypoints: usize,
}

/// Build the package in `cwd` with `bundler`.
///
/// # Build Process
///
/// 1. Discover `.ts` entry points under `options.src`
/// 2. Read name and version from `package.json`
/// 3. Turn the options into a [`BundleConfig`], applying the mode preset
/// 4. Run the bundler and report `<name> v<version> build successful`
///
/// # Errors
///
/// - `BuildError::NoSourceFiles` when discovery finds nothing; the bundler
///   is not invoked
/// - manifest errors when `package.json` is missing, invalid, or lacks
///   `name` / `version`
/// - `BuildError::BundlerFailed` when the bundler reports failure, after its
///   logs have been printed
pub async fn build_package(
    options: &BuildOptions,
    cwd: &Path,
    bundler: &dyn Bundler,
) -> Result<PackageBuild> {
    let src_dir = resolve_path(&options.src, cwd);
    let relative = discovery::discover(&src_dir, &options.ignore)?;

    if relative.is_empty() {
        ui::error("No .ts files found.");
        return Err(BuildError::NoSourceFiles(options.src.clone()).into());
    }

    let entrypoints: Vec<_> = relative.iter().map(|file| options.src.join(file)).collect();
    let count = entrypoints.len();

    let package = PackageMetadata::read(cwd).await?;

    let config = BundleConfig::from_options(options, entrypoints);
    tracing::debug!(
        target = config.target.as_str(),
        format = config.format.as_str(),
        minify = config.minify,
        splitting = config.splitting,
        "Bundling {} entry points",
        count
    );

    let spinner = ui::Spinner::new(&format!("Bundling {} ({} entry points)...", package, count));
    let outcome = bundler.bundle(&config).await;
    spinner.finish("Bundled");
    let outcome = outcome?;

    if outcome.success {
        ui::success(&format!("{} build successful", package));
        Ok(PackageBuild {
            package,
            entrypoints: count,
        })
    } else {
        ui::error(&format!("{} build failed", package));
        for line in &outcome.logs {
            ui::log_line(line);
        }
        Err(BuildError::BundlerFailed {
            package: package.to_string(),
            logs: outcome.logs,
        }
        .into())
    }
}
