pub mod error;
pub mod validation;
pub mod formats;
pub mod fs;

pub use error::{PathError, PipelineError, PipelineResult};
pub use validation::{validate_convert_settings, validate_optimize_settings};
pub use formats::{SourceFormat, TargetFormat};
pub use fs::{
    extract_filename,
    scan_directory,
    sibling_with_extension,
    validate_images_dir,
    write_atomic,
};
