use std::path::Path;

use anyhow::{Context, Result};

use png_to_jpeg_core::config::ConvertConfig;
use png_to_jpeg_core::walker;

use crate::cli::Cli;

/// Everything `main` does after argument parsing. An error here means
/// exit status 1.
pub fn run_cli(cli: &Cli) -> Result<()> {
    let input = cli
        .input
        .as_deref()
        .context("Missing input file/folder")?;
    run(input, &cli.to_config())
}

/// Process `input` and print the batch summary for directories.
/// Only root-level failures come back as errors.
pub fn run(input: &Path, config: &ConvertConfig) -> Result<()> {
    log::debug!(
        "Processing {} (quality {}, recursive {})",
        input.display(),
        config.quality,
        config.recursive
    );

    let report = walker::process(input, config)
        .with_context(|| format!("Failed to process {}", input.display()))?;

    if report.directory {
        report.print_summary();
    }

    Ok(())
}
