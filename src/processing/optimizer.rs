//! In-place optimizer: caps width and recompresses every qualifying image.

use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::core::{
    ensure_vips, BatchReport, FileOutcome, ImageJob, OptimizeSettings, OutcomeStatus,
};
use crate::processing::libvips::optimize_buffer;
use crate::utils::{scan_directory, validate_optimize_settings, write_atomic, PipelineResult};

pub const OPTIMIZE_JOB: &str = "optimize";

/// Sequential optimizer.
///
/// Each file is read, transformed and written back before the next one is
/// opened, so at most one decoded image is held in memory.
#[derive(Debug, Clone, Default)]
pub struct ImageOptimizer {
    settings: OptimizeSettings,
}

impl ImageOptimizer {
    pub fn new(settings: OptimizeSettings) -> PipelineResult<Self> {
        validate_optimize_settings(&settings)?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &OptimizeSettings {
        &self.settings
    }

    /// Optimizes every qualifying image in `dir`.
    ///
    /// Only directory and backend errors are returned; per-file failures are
    /// logged and recorded in the report.
    pub async fn run(&self, dir: &Path) -> PipelineResult<BatchReport> {
        ensure_vips()?;
        let jobs = scan_directory(dir).await?;
        info!("Optimizing {} images in {}", jobs.len(), dir.display());

        let start = Instant::now();
        let mut report = BatchReport::new(OPTIMIZE_JOB);

        for job in &jobs {
            let outcome = match self.optimize_file(job).await {
                Ok(outcome) => {
                    info!(
                        "{} optimized ({:.2} KB saved, width {} → {})",
                        job.file_name(),
                        outcome.saved_bytes() as f64 / 1024.0,
                        outcome.original_width.unwrap_or_default(),
                        outcome.output_width.unwrap_or_default(),
                    );
                    outcome
                }
                Err(e) => {
                    warn!("Error optimizing {}: {}", job.file_name(), e);
                    FileOutcome::failed(job.input_path.clone(), job.input_path.clone(), e)
                }
            };
            report.outcomes.push(outcome);
        }

        report.elapsed_ms = start.elapsed().as_millis() as u64;
        info!("{}", report.summary());
        Ok(report)
    }

    /// Reads, transforms and atomically replaces one image.
    async fn optimize_file(&self, job: &ImageJob) -> PipelineResult<FileOutcome> {
        let bytes = tokio::fs::read(&job.input_path).await?;
        let original_size = bytes.len() as u64;

        let name = job.file_name();
        let format = job.format;
        let settings = self.settings.clone();
        let encoded = tokio::task::spawn_blocking(move || {
            optimize_buffer(&bytes, &name, format, &settings)
        })
        .await??;

        write_atomic(&job.input_path, &encoded.bytes).await?;
        debug!("Replaced {}", job.input_path.display());

        Ok(FileOutcome {
            input_path: job.input_path.clone(),
            output_path: job.input_path.clone(),
            status: OutcomeStatus::Succeeded,
            original_size,
            output_size: encoded.bytes.len() as u64,
            original_width: Some(encoded.original_width),
            output_width: Some(encoded.output_width),
            error: None,
        })
    }
}
