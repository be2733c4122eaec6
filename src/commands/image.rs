//! Entry points behind the `convert-images` and `optimize-images` binaries.

use anyhow::{bail, Context};
use clap::ArgMatches;
use tracing::{debug, info};
use crate::core::BatchReport;
use crate::processing::{FormatConverter, ImageOptimizer};
use super::cli::{convert_settings, job_options, optimize_settings, JobOptions};

/// Runs the format converter with parsed command-line options.
///
/// Per-file failures do not affect the exit status unless `--strict` is set.
pub async fn run_convert(matches: &ArgMatches) -> anyhow::Result<BatchReport> {
    let options = job_options(matches);
    let settings = convert_settings(matches);
    debug!("Convert settings: {:?}", settings);

    let converter = FormatConverter::new(settings)?;
    let report = converter
        .run(&options.images_dir)
        .await
        .with_context(|| format!("Cannot convert images in {}", options.images_dir.display()))?;

    finish(&options, report)
}

/// Runs the in-place optimizer with parsed command-line options.
///
/// Per-file failures do not affect the exit status unless `--strict` is set.
pub async fn run_optimize(matches: &ArgMatches) -> anyhow::Result<BatchReport> {
    let options = job_options(matches);
    let settings = optimize_settings(matches);
    debug!("Optimize settings: {:?}", settings);

    let optimizer = ImageOptimizer::new(settings)?;
    let report = optimizer
        .run(&options.images_dir)
        .await
        .with_context(|| format!("Cannot optimize images in {}", options.images_dir.display()))?;

    finish(&options, report)
}

fn finish(options: &JobOptions, report: BatchReport) -> anyhow::Result<BatchReport> {
    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    if options.strict && report.failed() > 0 {
        bail!("{} of {} images failed", report.failed(), report.outcomes.len());
    }

    info!("All images processed");
    Ok(report)
}
