pub mod libvips;
mod converter;
mod optimizer;

pub use converter::{FormatConverter, CONVERT_JOB};
pub use optimizer::{ImageOptimizer, OPTIMIZE_JOB};
