//! Error types for the image pipeline.
//!
//! Provides a small hierarchy of error types using `thiserror`. Errors are
//! `Clone + Serialize` so a failure can be carried inside a [`FileOutcome`]
//! and emitted in the JSON batch report.
//!
//! [`FileOutcome`]: crate::core::FileOutcome

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use serde::Serialize;

/// File path errors.
#[derive(Error, Debug, Clone, Serialize, PartialEq)]
pub enum PathError {
    /// Path does not exist
    #[error("Not found: {0}")]
    NotFound(PathBuf),
    /// Path exists but is not a directory
    #[error("Not a directory: {0}")]
    NotDirectory(PathBuf),
    /// IO error accessing the path
    #[error("IO error: {0}")]
    IO(String),
}

/// Main error type for the pipeline.
#[derive(Error, Debug, Clone, Serialize, PartialEq)]
pub enum PipelineError {
    /// Invalid settings or configuration
    #[error("Validation error: {0}")]
    Validation(String),

    /// The images directory could not be used
    #[error("Path error: {0}")]
    Path(#[from] PathError),

    /// Decode, resize or encode failed
    #[error("Processing error: {0}")]
    Processing(String),

    /// File IO error
    #[error("IO error: {0}")]
    IO(String),

    /// Unsupported or invalid image format
    #[error("Format error: {0}")]
    Format(String),
}

/// Convenience result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

impl PipelineError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        Self::Validation(msg.into())
    }

    pub fn processing<T: Into<String>>(msg: T) -> Self {
        Self::Processing(msg.into())
    }

    pub fn io<T: Into<String>>(msg: T) -> Self {
        Self::IO(msg.into())
    }

    pub fn format<T: Into<String>>(msg: T) -> Self {
        Self::Format(msg.into())
    }
}

impl PathError {
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound(path.into())
    }

    pub fn not_directory(path: impl Into<PathBuf>) -> Self {
        Self::NotDirectory(path.into())
    }
}

// Convert std::io::Error to PipelineError
impl From<io::Error> for PipelineError {
    fn from(err: io::Error) -> Self {
        Self::IO(err.to_string())
    }
}

// Convert io::Error to PathError
impl From<io::Error> for PathError {
    fn from(err: io::Error) -> Self {
        Self::IO(err.to_string())
    }
}

impl From<tokio::task::JoinError> for PipelineError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Processing(format!("Task panicked: {err}"))
    }
}
