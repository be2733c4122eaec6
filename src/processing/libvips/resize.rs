// src/processing/libvips/resize.rs

//! Width capping for the optimizer.

use libvips::{ops, VipsImage};
use crate::utils::PipelineError;

type Result<T> = std::result::Result<T, PipelineError>;

/// libvips' upper bound for any image dimension.
const VIPS_MAX_COORD: i32 = 10_000_000;

/// Shrinks `image` so its width is at most `max_width`, keeping the aspect
/// ratio. Images already at or below the cap are returned untouched.
pub fn constrain_width(image: VipsImage, max_width: u32) -> Result<VipsImage> {
    let max_width = max_width.min(VIPS_MAX_COORD as u32) as i32;
    if image.get_width() <= max_width {
        return Ok(image);
    }

    use ops::{Size, ThumbnailImageOptions};

    // An effectively unbounded height lets the width alone drive the scale.
    let opts = ThumbnailImageOptions {
        height: VIPS_MAX_COORD,
        size: Size::Down, // never upscale
        no_rotate: true,
        ..ThumbnailImageOptions::default()
    };

    ops::thumbnail_image_with_opts(&image, max_width, &opts)
        .map_err(|e| PipelineError::processing(format!("Resize (width) failed: {e}")))
}
