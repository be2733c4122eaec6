// src/processing/libvips/formats.rs

//! Maps job settings to libvips format-specific save options.
//!
//! Every encoder writes to an in-memory buffer so callers decide how the
//! bytes reach disk. Metadata is stripped on every save.

use libvips::ops::{self, ForeignHeifCompression, ForeignKeep, ForeignSubsample};
use libvips::VipsImage;
use crate::core::OptimizeSettings;
use crate::utils::{PipelineError, SourceFormat, TargetFormat};

type Result<T> = std::result::Result<T, PipelineError>;

const WEBP_EFFORT: i32 = 4;
const AVIF_EFFORT: i32 = 4;
const PNG_EFFORT: i32 = 7;
// Palette quantisation quality; 100 keeps as many colours as the palette allows.
const PNG_PALETTE_QUALITY: i32 = 100;

// ── Converter targets ──────────────────────────────────────────────────────────────────

/// Encodes `image` as lossy WebP at `quality`.
pub fn encode_webp(image: &VipsImage, quality: u32) -> Result<Vec<u8>> {
    let opts = ops::WebpsaveBufferOptions {
        q: quality as i32,
        lossless: false,
        effort: WEBP_EFFORT,
        smart_subsample: false,
        keep: ForeignKeep::None,
        ..ops::WebpsaveBufferOptions::default()
    };

    ops::webpsave_buffer_with_opts(image, &opts)
        .map_err(|e| PipelineError::processing(format!("WebP save failed: {e}")))
}

/// Encodes `image` as AVIF (AV1 in a HEIF container) at `quality`.
pub fn encode_avif(image: &VipsImage, quality: u32) -> Result<Vec<u8>> {
    let opts = ops::HeifsaveBufferOptions {
        q: quality as i32,
        lossless: false,
        compression: ForeignHeifCompression::Av1,
        effort: AVIF_EFFORT,
        subsample_mode: ForeignSubsample::On, // 4:2:0
        keep: ForeignKeep::None,
        ..ops::HeifsaveBufferOptions::default()
    };

    ops::heifsave_buffer_with_opts(image, &opts)
        .map_err(|e| PipelineError::processing(format!("AVIF save failed: {e}")))
}

/// Dispatches to the converter encoder for `target`.
pub fn encode_target(image: &VipsImage, target: TargetFormat, quality: u32) -> Result<Vec<u8>> {
    match target {
        TargetFormat::WebP => encode_webp(image, quality),
        TargetFormat::AVIF => encode_avif(image, quality),
    }
}

// ── Optimizer re-encoding ──────────────────────────────────────────────────────────────

/// Encodes `image` as JPEG with the mozjpeg profile.
///
/// Trellis quantisation, overshoot deringing, optimised scans and quant
/// table 3 together give noticeably smaller files at the same quality.
pub fn encode_jpeg(image: &VipsImage, quality: u32) -> Result<Vec<u8>> {
    let opts = ops::JpegsaveBufferOptions {
        q: quality as i32,
        optimize_coding: true,
        optimize_scans: true,
        trellis_quant: true,
        overshoot_deringing: true,
        quant_table: 3,
        subsample_mode: ForeignSubsample::On,
        keep: ForeignKeep::None,
        ..ops::JpegsaveBufferOptions::default()
    };

    ops::jpegsave_buffer_with_opts(image, &opts)
        .map_err(|e| PipelineError::processing(format!("JPEG save failed: {e}")))
}

/// Encodes `image` as PNG at zlib level `compression`, optionally quantised
/// to a palette.
pub fn encode_png(image: &VipsImage, compression: u32, palette: bool) -> Result<Vec<u8>> {
    let opts = ops::PngsaveBufferOptions {
        compression: compression as i32,
        palette,
        q: PNG_PALETTE_QUALITY,
        effort: PNG_EFFORT,
        keep: ForeignKeep::None,
        ..ops::PngsaveBufferOptions::default()
    };

    ops::pngsave_buffer_with_opts(image, &opts)
        .map_err(|e| PipelineError::processing(format!("PNG save failed: {e}")))
}

/// Re-encodes `image` in its source format with the optimizer's settings.
pub fn encode_source(
    image: &VipsImage,
    format: SourceFormat,
    settings: &OptimizeSettings,
) -> Result<Vec<u8>> {
    match format {
        SourceFormat::JPEG => encode_jpeg(image, settings.jpeg_quality),
        SourceFormat::PNG => encode_png(image, settings.png_compression, settings.png_palette),
    }
}
