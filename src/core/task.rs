//! A single qualifying image found by the directory scan.

use std::path::PathBuf;
use crate::utils::{SourceFormat, TargetFormat, extract_filename, sibling_with_extension};

/// One image a batch job will process.
#[derive(Debug, Clone)]
pub struct ImageJob {
    /// Path to the source image file
    pub input_path: PathBuf,
    /// Format derived from the extension
    pub format: SourceFormat,
}

impl ImageJob {
    pub fn new(input_path: PathBuf, format: SourceFormat) -> Self {
        Self { input_path, format }
    }

    /// Sibling path the converter writes for `target`.
    pub fn converted_path(&self, target: TargetFormat) -> PathBuf {
        sibling_with_extension(&self.input_path, target.extension())
    }

    /// File name used in log lines
    pub fn file_name(&self) -> String {
        extract_filename(&self.input_path)
    }
}
