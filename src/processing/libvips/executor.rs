// src/processing/libvips/executor.rs

//! Blocking decode/transform/encode steps.
//!
//! These run inside `tokio::task::spawn_blocking` so the async runtime is
//! never blocked. libvips manages its own internal thread pool for per-image
//! parallelism.

use libvips::{ops, VipsImage};
use tracing::debug;

use crate::core::OptimizeSettings;
use crate::utils::{PipelineError, PipelineResult, SourceFormat, TargetFormat};

use super::formats::{encode_source, encode_target};
use super::resize::constrain_width;

/// Encoded bytes plus the dimensions seen on the way through.
#[derive(Debug)]
pub struct Encoded {
    pub bytes: Vec<u8>,
    pub original_width: u32,
    pub output_width: u32,
}

/// Decodes an image from memory and rotates it upright.
///
/// The EXIF orientation is applied to the pixels because every encoder strips
/// metadata. libvips reads from `bytes` lazily, so the slice must outlive the
/// returned image and everything derived from it.
fn decode(bytes: &[u8], name: &str) -> PipelineResult<VipsImage> {
    let image = VipsImage::new_from_buffer(bytes, "")
        .map_err(|e| PipelineError::processing(format!("Failed to load '{name}': {e}")))?;

    ops::autorot(&image)
        .map_err(|e| PipelineError::processing(format!("Failed to rotate '{name}': {e}")))
}

fn width_of(image: &VipsImage) -> u32 {
    image.get_width().max(0) as u32
}

/// Decodes `bytes` and re-encodes them as `target` at `quality`.
pub fn convert_buffer(
    bytes: &[u8],
    name: &str,
    target: TargetFormat,
    quality: u32,
) -> PipelineResult<Encoded> {
    let image = decode(bytes, name)?;
    let width = width_of(&image);
    debug!("Loaded '{}': {}×{}", name, width, image.get_height());

    let encoded = encode_target(&image, target, quality)?;
    Ok(Encoded {
        bytes: encoded,
        original_width: width,
        output_width: width,
    })
}

/// Decodes `bytes`, caps the width, and re-encodes in the source format.
pub fn optimize_buffer(
    bytes: &[u8],
    name: &str,
    format: SourceFormat,
    settings: &OptimizeSettings,
) -> PipelineResult<Encoded> {
    let image = decode(bytes, name)?;
    let original_width = width_of(&image);
    debug!("Loaded '{}': {}×{}", name, original_width, image.get_height());

    let image = constrain_width(image, settings.max_width)?;
    let output_width = width_of(&image);
    if output_width != original_width {
        debug!(
            "Resized '{}': {} → {}×{}",
            name,
            original_width,
            output_width,
            image.get_height()
        );
    }

    let encoded = encode_source(&image, format, settings)?;
    Ok(Encoded {
        bytes: encoded,
        original_width,
        output_width,
    })
}
