//! Format converter: writes a WebP (or AVIF) sibling for every qualifying image.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::core::{
    ensure_vips, BatchReport, ConvertSettings, FileOutcome, ImageJob, OutcomeStatus,
};
use crate::processing::libvips::convert_buffer;
use crate::utils::{
    scan_directory, validate_convert_settings, write_atomic, PipelineError, PipelineResult,
};

pub const CONVERT_JOB: &str = "convert";

/// Converts images on a bounded pool of concurrent tasks.
///
/// At most `settings.workers` conversions hold a decoded image at once.
/// `run` joins every task before returning, so the report covers every file.
#[derive(Debug, Clone, Default)]
pub struct FormatConverter {
    settings: ConvertSettings,
}

impl FormatConverter {
    pub fn new(settings: ConvertSettings) -> PipelineResult<Self> {
        validate_convert_settings(&settings)?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &ConvertSettings {
        &self.settings
    }

    /// Converts every qualifying image in `dir`.
    ///
    /// Only directory and backend errors are returned; per-file failures are
    /// logged and recorded in the report. Outcomes are in scan order.
    pub async fn run(&self, dir: &Path) -> PipelineResult<BatchReport> {
        ensure_vips()?;
        let jobs = scan_directory(dir).await?;
        info!(
            "Converting {} images in {} to {} ({} workers)",
            jobs.len(),
            dir.display(),
            self.settings.target,
            self.settings.workers
        );

        let start = Instant::now();
        let semaphore = Arc::new(Semaphore::new(self.settings.workers));
        let mut tasks = JoinSet::new();

        for (index, job) in jobs.iter().cloned().enumerate() {
            let semaphore = Arc::clone(&semaphore);
            let settings = self.settings.clone();
            tasks.spawn(async move {
                let output_path = job.converted_path(settings.target);
                let result = match semaphore.acquire_owned().await {
                    Ok(_permit) => convert_file(&job, &settings).await,
                    Err(e) => Err(PipelineError::processing(format!(
                        "Failed to acquire worker: {e}"
                    ))),
                };

                let outcome = match result {
                    Ok(outcome) => {
                        if outcome.status == OutcomeStatus::Skipped {
                            info!("{} skipped, {} exists", job.file_name(), outcome.output_path.display());
                        } else {
                            info!("Converted {} to {}", job.file_name(), settings.target);
                        }
                        outcome
                    }
                    Err(e) => {
                        warn!("Error converting {}: {}", job.file_name(), e);
                        FileOutcome::failed(job.input_path.clone(), output_path, e)
                    }
                };
                (index, outcome)
            });
        }

        let mut slots: Vec<Option<FileOutcome>> = vec![None; jobs.len()];
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, outcome)) => slots[index] = Some(outcome),
                // Encoder panics already come back as per-file errors.
                Err(e) => warn!("Conversion task aborted: {}", e),
            }
        }

        let mut report = BatchReport::new(CONVERT_JOB);
        report.outcomes = slots
            .into_iter()
            .zip(&jobs)
            .map(|(slot, job)| {
                slot.unwrap_or_else(|| {
                    FileOutcome::failed(
                        job.input_path.clone(),
                        job.converted_path(self.settings.target),
                        PipelineError::processing("Conversion task did not complete"),
                    )
                })
            })
            .collect();
        report.elapsed_ms = start.elapsed().as_millis() as u64;

        info!("{}", report.summary());
        Ok(report)
    }
}

/// Reads one source, encodes it, and writes the sibling atomically.
async fn convert_file(job: &ImageJob, settings: &ConvertSettings) -> PipelineResult<FileOutcome> {
    let output_path = job.converted_path(settings.target);

    if settings.skip_existing && tokio::fs::try_exists(&output_path).await? {
        return Ok(FileOutcome::skipped(job.input_path.clone(), output_path));
    }

    let bytes = tokio::fs::read(&job.input_path).await?;
    let original_size = bytes.len() as u64;

    let name = job.file_name();
    let (target, quality) = (settings.target, settings.quality);
    let encoded =
        tokio::task::spawn_blocking(move || convert_buffer(&bytes, &name, target, quality))
            .await??;

    write_atomic(&output_path, &encoded.bytes).await?;
    debug!("Wrote {}", output_path.display());

    Ok(FileOutcome {
        input_path: job.input_path.clone(),
        output_path,
        status: OutcomeStatus::Succeeded,
        original_size,
        output_size: encoded.bytes.len() as u64,
        original_width: Some(encoded.original_width),
        output_width: Some(encoded.output_width),
        error: None,
    })
}
