//! Shared test utilities for image-based unit tests.

use image::{Rgb, RgbImage};

/// Render a `w`×`h` image filled with a single color.
pub(crate) fn solid_image(w: u32, h: u32, color: Rgb<u8>) -> RgbImage {
    RgbImage::from_pixel(w, h, color)
}

/// Render an image whose pixel at (x, y) is `[x, y, x + y]` (mod 256), so
/// every coordinate carries a distinguishable value.
pub(crate) fn gradient_image(w: u32, h: u32) -> RgbImage {
    RgbImage::from_fn(w, h, |x, y| {
        Rgb([x as u8, y as u8, (x + y) as u8])
    })
}
