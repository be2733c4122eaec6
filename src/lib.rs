// Module declarations in dependency order
pub mod commands;
pub mod core;
pub mod processing;
pub mod utils;

// Public exports for external consumers
pub use crate::core::{
    BatchReport, ConvertSettings, FileOutcome, ImageJob, OptimizeSettings, OutcomeStatus,
};
pub use crate::processing::{FormatConverter, ImageOptimizer};
pub use crate::utils::{PipelineError, PipelineResult, SourceFormat, TargetFormat};
