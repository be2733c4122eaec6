//! Core types and process state.
//!
//! - [`ImageJob`]: one qualifying file found by the directory scan
//! - [`ConvertSettings`] / [`OptimizeSettings`]: per-job configuration
//! - [`FileOutcome`] / [`BatchReport`]: results of a run
//! - [`ensure_vips`]: one-time libvips initialization

mod state;
mod types;
mod task;

pub use state::ensure_vips;
pub use types::{
    BatchReport, ConvertSettings, FileOutcome, OptimizeSettings, OutcomeStatus,
    DEFAULT_MAX_WIDTH, DEFAULT_QUALITY, DEFAULT_WORKERS,
};
pub use task::ImageJob;
