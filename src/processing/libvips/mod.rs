// src/processing/libvips/mod.rs

//! Native image processing via libvips-rs.
//!
//! - [`executor`]: blocking decode → transform → encode steps per image.
//! - [`resize`]: width capping via `ops::thumbnail_image_with_opts`.
//! - [`formats`]: settings → format-specific `ops::*save_buffer_with_opts` calls.

mod executor;
mod formats;
mod resize;

pub use executor::{Encoded, convert_buffer, optimize_buffer};
