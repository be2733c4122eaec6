//! Command-line handlers for the two batch jobs.
//!
//! - [`run_convert`]: write modern-format siblings next to every image
//! - [`run_optimize`]: downsize and recompress every image in place

mod cli;
mod image;

pub use cli::{
    convert_command, optimize_command, JobOptions, DEFAULT_IMAGES_DIR, IMAGES_DIR_ENV,
};
pub use image::{run_convert, run_optimize};

/// Installs the compact stderr subscriber used by both binaries.
///
/// Logs stay off stdout so `--json` output can be piped.
///
/// The level comes from `RUST_LOG` and defaults to `info`.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)         // Remove file path
        .with_line_number(false)  // Remove line numbers
        .with_thread_ids(false)   // Remove thread IDs
        .with_thread_names(false) // Remove thread names
        .with_target(false)       // Remove module path
        .with_ansi(true)          // Keep colored output
        .with_writer(std::io::stderr)
        .compact()                // Use compact formatter instead of pretty
        .init();
}
