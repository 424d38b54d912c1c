//! Failure modes of the coordinate resolver.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while resolving a pixel coordinate.
///
/// Argument-shape problems (non-integer tokens, wrong argument count) are a
/// CLI-boundary concern and never reach the resolver, so they have no
/// variant here.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Decoding failed through every available decoder; carries the last
    /// decoder's underlying cause.
    #[error("unable to load image {}: {source}", .path.display())]
    ImageLoad {
        /// Path of the file that could not be decoded.
        path: PathBuf,
        /// Cause reported by the last decoder tried.
        #[source]
        source: image::ImageError,
    },

    /// The normalized coordinate falls outside the image extent.
    #[error("pixel position ({x}, {y}) out of bounds for {width}x{height} image")]
    OutOfBounds {
        /// Normalized x (after the single negative-index shift).
        x: i64,
        /// Normalized y (after the single negative-index shift).
        y: i64,
        /// Image width in pixels.
        width: u32,
        /// Image height in pixels.
        height: u32,
    },
}
