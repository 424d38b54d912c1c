//! Coordinate normalization, bounds validation, and pixel extraction.

use std::path::Path;

use image::RgbImage;

use crate::error::ResolveError;
use crate::loader;

/// Outcome of a successful pixel lookup.
///
/// Carries the decoded image so a caller can hand it straight to the
/// marker renderer without decoding twice.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// Resolved column, guaranteed `0 <= x < width`.
    pub x: u32,
    /// Resolved row, guaranteed `0 <= y < height`.
    pub y: u32,
    /// RGB channel values at (x, y).
    pub value: [u8; 3],
    /// The decoded 3-channel image.
    pub image: RgbImage,
}

/// Decode the image at `path` and resolve the requested coordinate pair.
///
/// Negative components count back from the far edge, Python-style: -1 is
/// the last valid index. See [`resolve_in_image`] for the normalization and
/// validation rules.
pub fn resolve(path: &Path, x: i64, y: i64) -> Result<Resolution, ResolveError> {
    let image = loader::load_rgb8(path)?;
    resolve_in_image(image, x, y)
}

/// Resolve a coordinate pair against an already-decoded image.
///
/// Each axis is normalized independently and exactly once: a request of
/// `-extent - 1` stays out of range rather than wrapping twice. Bounds are
/// validated before any pixel access; addressing is (row = y, column = x).
pub fn resolve_in_image(image: RgbImage, x: i64, y: i64) -> Result<Resolution, ResolveError> {
    let (width, height) = image.dimensions();
    let nx = normalize_axis(x, width);
    let ny = normalize_axis(y, height);

    match (validate(nx, width), validate(ny, height)) {
        (Some(x), Some(y)) => {
            let value = image.get_pixel(x, y).0;
            Ok(Resolution { x, y, value, image })
        }
        _ => Err(ResolveError::OutOfBounds {
            x: nx,
            y: ny,
            width,
            height,
        }),
    }
}

/// Apply the negative-index shift for one axis. Applied exactly once.
///
/// Widened i64 arithmetic: `v + extent` cannot overflow for any `i64`
/// request and any `u32` extent.
fn normalize_axis(v: i64, extent: u32) -> i64 {
    if v < 0 {
        v + i64::from(extent)
    } else {
        v
    }
}

/// Accept a normalized axis value only inside `[0, extent)`.
fn validate(v: i64, extent: u32) -> Option<u32> {
    if v >= 0 && v < i64::from(extent) {
        Some(v as u32)
    } else {
        None
    }
}
