//! bun-build CLI entry point.
//!
//! Parses flags, sets up logging and colors, layers the configuration, and
//! runs the build.

use bun_build::bundler::BunBundler;
use bun_build::config::PartialOptions;
use bun_build::declarations::Tsc;
use bun_build::{cli, error, logger, orchestrator, ui, utils};
use clap::{CommandFactory, Parser};
use miette::{IntoDiagnostic, Result};
use std::time::Instant;

#[tokio::main]
async fn main() -> Result<()> {
    // No arguments at all: show usage instead of building
    if std::env::args_os().len() <= 1 {
        cli::Cli::command().print_help().into_diagnostic()?;
        return Ok(());
    }

    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    run(args).await.map_err(error::cli_error_to_miette)
}

async fn run(args: cli::Cli) -> bun_build::Result<()> {
    let start_time = Instant::now();
    let cwd = utils::get_cwd()?;

    let mut partial =
        PartialOptions::load(args.to_partial_options(), &cwd, args.config.as_deref())?;
    if !partial.has_mode_or_target() {
        tracing::debug!("No mode or target configured, assuming library mode");
        partial.lib = Some(true);
    }
    let options = partial.resolve()?;

    let bundler = BunBundler::new(&options.bun_bin, &cwd);
    let emitter = Tsc::for_project(&cwd);
    orchestrator::run(&options, &cwd, &bundler, &emitter).await?;

    ui::success(&format!(
        "Build complete. ({})",
        ui::format_duration(start_time.elapsed())
    ));
    Ok(())
}
