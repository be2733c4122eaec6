//! Fixture helpers shared by the integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use libvips::{ops, VipsImage};
use site_images_lib::core::ensure_vips;

/// Writes a solid RGB PNG of the given size.
pub fn write_png(dir: &Path, name: &str, width: i32, height: i32) -> PathBuf {
    ensure_vips().unwrap();
    let image = ops::black_with_opts(width, height, &ops::BlackOptions { bands: 3 }).unwrap();
    let bytes = ops::pngsave_buffer(&image).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

/// Writes a solid RGB JPEG of the given size.
pub fn write_jpeg(dir: &Path, name: &str, width: i32, height: i32) -> PathBuf {
    ensure_vips().unwrap();
    let image = ops::black_with_opts(width, height, &ops::BlackOptions { bands: 3 }).unwrap();
    let bytes = ops::jpegsave_buffer(&image).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

pub fn write_bytes(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

/// Decodes `path` and returns (width, height).
pub fn dimensions(path: &Path) -> (i32, i32) {
    ensure_vips().unwrap();
    let bytes = std::fs::read(path).unwrap();
    let image = VipsImage::new_from_buffer(&bytes, "").unwrap();
    (image.get_width(), image.get_height())
}

/// File names in `dir`, sorted.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Writes a solid RGB PNG with zlib compression disabled.
pub fn write_uncompressed_png(dir: &Path, name: &str, width: i32, height: i32) -> PathBuf {
    ensure_vips().unwrap();
    let image = ops::black_with_opts(width, height, &ops::BlackOptions { bands: 3 }).unwrap();
    let opts = ops::PngsaveBufferOptions { compression: 0, ..ops::PngsaveBufferOptions::default() };
    let bytes = ops::pngsave_buffer_with_opts(&image, &opts).unwrap();
    write_bytes(dir, name, &bytes)
}

/// Writes a greyscale JPEG of gaussian noise at `quality`, so the encoder
/// settings dominate the file size.
pub fn write_noise_jpeg(dir: &Path, name: &str, width: i32, height: i32, quality: i32) -> PathBuf {
    ensure_vips().unwrap();
    let noise = ops::gaussnoise(width, height).unwrap();
    let image = ops::cast(&noise, ops::BandFormat::Uchar).unwrap();
    let opts = ops::JpegsaveBufferOptions { q: quality, ..ops::JpegsaveBufferOptions::default() };
    let bytes = ops::jpegsave_buffer_with_opts(&image, &opts).unwrap();
    write_bytes(dir, name, &bytes)
}

/// Writes a solid JPEG carrying an EXIF orientation tag.
///
/// The stored pixels are `width`×`height`; orientation 6 means viewers
/// rotate it 90° clockwise.
pub fn write_oriented_jpeg(
    dir: &Path,
    name: &str,
    width: i32,
    height: i32,
    orientation: u8,
) -> PathBuf {
    ensure_vips().unwrap();
    let image = ops::black_with_opts(width, height, &ops::BlackOptions { bands: 3 }).unwrap();
    let jpeg = ops::jpegsave_buffer(&image).unwrap();

    // APP1 "Exif": little-endian TIFF header, one IFD entry 0x0112 (SHORT).
    let mut app1: Vec<u8> = vec![0xFF, 0xE1, 0x00, 0x22];
    app1.extend_from_slice(b"Exif\0\0");
    app1.extend_from_slice(&[b'I', b'I', 0x2A, 0x00, 0x08, 0x00, 0x00, 0x00]);
    app1.extend_from_slice(&[0x01, 0x00]);
    app1.extend_from_slice(&[0x12, 0x01, 0x03, 0x00, 0x01, 0x00, 0x00, 0x00]);
    app1.extend_from_slice(&[orientation, 0x00, 0x00, 0x00]);
    app1.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);

    let mut bytes = jpeg[..2].to_vec();
    bytes.extend_from_slice(&app1);
    bytes.extend_from_slice(&jpeg[2..]);
    write_bytes(dir, name, &bytes)
}

/// PNG colour type from the IHDR chunk (3 = palette).
pub fn png_color_type(path: &Path) -> u8 {
    let bytes = std::fs::read(path).unwrap();
    assert_eq!(&bytes[12..16], b"IHDR");
    bytes[25]
}
