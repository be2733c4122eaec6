//! Core types for job settings and results.

use serde::Serialize;
use std::path::PathBuf;
use crate::utils::{PipelineError, TargetFormat};

/// Default worker count for the converter pool
pub const DEFAULT_WORKERS: usize = 4;
/// Default encoder quality for both jobs
pub const DEFAULT_QUALITY: u32 = 75;
/// Widest image the optimizer leaves in place
pub const DEFAULT_MAX_WIDTH: u32 = 1600;

/// Settings for the format converter.
#[derive(Debug, Clone)]
pub struct ConvertSettings {
    /// Format written next to each source
    pub target: TargetFormat,
    /// Encoder quality (1-100)
    pub quality: u32,
    /// Maximum number of conversions in flight
    pub workers: usize,
    /// Leave an existing target alone instead of overwriting it
    pub skip_existing: bool,
}

impl Default for ConvertSettings {
    fn default() -> Self {
        Self {
            target: TargetFormat::WebP,
            quality: DEFAULT_QUALITY,
            workers: DEFAULT_WORKERS,
            skip_existing: false,
        }
    }
}

/// Settings for the in-place optimizer.
#[derive(Debug, Clone)]
pub struct OptimizeSettings {
    /// Images wider than this are downscaled; narrower ones keep their size
    pub max_width: u32,
    /// JPEG quality (1-100), encoded with the mozjpeg profile
    pub jpeg_quality: u32,
    /// zlib compression level for PNG (0-9)
    pub png_compression: u32,
    /// Quantise PNGs to a palette
    pub png_palette: bool,
}

impl Default for OptimizeSettings {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            jpeg_quality: DEFAULT_QUALITY,
            png_compression: 9,
            png_palette: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Succeeded,
    Skipped,
    Failed,
}

/// What happened to one qualifying file.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileOutcome {
    pub input_path: PathBuf,
    /// Where the result was (or would have been) written
    pub output_path: PathBuf,
    pub status: OutcomeStatus,
    pub original_size: u64,
    pub output_size: u64,
    pub original_width: Option<u32>,
    pub output_width: Option<u32>,
    pub error: Option<PipelineError>,
}

impl FileOutcome {
    fn with_status(input_path: PathBuf, output_path: PathBuf, status: OutcomeStatus) -> Self {
        Self {
            input_path,
            output_path,
            status,
            original_size: 0,
            output_size: 0,
            original_width: None,
            output_width: None,
            error: None,
        }
    }

    pub fn failed(input_path: PathBuf, output_path: PathBuf, error: PipelineError) -> Self {
        Self {
            error: Some(error),
            ..Self::with_status(input_path, output_path, OutcomeStatus::Failed)
        }
    }

    pub fn skipped(input_path: PathBuf, output_path: PathBuf) -> Self {
        Self::with_status(input_path, output_path, OutcomeStatus::Skipped)
    }

    /// Bytes saved (negative if the file grew)
    pub fn saved_bytes(&self) -> i64 {
        self.original_size as i64 - self.output_size as i64
    }
}

/// Aggregated result of one batch job run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub job: String,
    pub outcomes: Vec<FileOutcome>,
    pub elapsed_ms: u64,
}

impl BatchReport {
    pub fn new(job: impl Into<String>) -> Self {
        Self {
            job: job.into(),
            outcomes: Vec::new(),
            elapsed_ms: 0,
        }
    }

    fn count(&self, status: OutcomeStatus) -> usize {
        self.outcomes.iter().filter(|o| o.status == status).count()
    }

    pub fn succeeded(&self) -> usize {
        self.count(OutcomeStatus::Succeeded)
    }

    pub fn skipped(&self) -> usize {
        self.count(OutcomeStatus::Skipped)
    }

    pub fn failed(&self) -> usize {
        self.count(OutcomeStatus::Failed)
    }

    pub fn total_input_bytes(&self) -> u64 {
        self.succeeded_outcomes().map(|o| o.original_size).sum()
    }

    pub fn total_output_bytes(&self) -> u64 {
        self.succeeded_outcomes().map(|o| o.output_size).sum()
    }

    fn succeeded_outcomes(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes
            .iter()
            .filter(|o| o.status == OutcomeStatus::Succeeded)
    }

    /// One-line human summary logged at the end of every run.
    pub fn summary(&self) -> String {
        let saved_kb =
            (self.total_input_bytes() as i64 - self.total_output_bytes() as i64) as f64 / 1024.0;
        format!(
            "{} finished in {}ms: {} succeeded, {} skipped, {} failed ({saved_kb:.2} KB saved)",
            self.job,
            self.elapsed_ms,
            self.succeeded(),
            self.skipped(),
            self.failed()
        )
    }
}
