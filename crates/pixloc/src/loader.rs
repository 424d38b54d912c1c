//! Image decoding with a fixed-order decoder fallback.
//!
//! Two decoders cover the common failure cases: [`ExtensionDecoder`] trusts
//! the file extension, [`ContentDecoder`] sniffs the codec from the bytes
//! and rescues files with a missing or misleading extension. They run in
//! that order; the first success wins and the last failure's cause is
//! surfaced if both fail.

use std::fs;
use std::path::Path;

use image::{DynamicImage, ImageError, RgbImage};

use crate::error::ResolveError;

/// A single image-decoding strategy.
pub trait Decode {
    /// Short name used in fallback logs.
    fn name(&self) -> &'static str;

    /// Attempt to decode the file at `path`.
    fn decode(&self, path: &Path) -> Result<DynamicImage, ImageError>;
}

/// Picks the codec from the file extension.
pub struct ExtensionDecoder;

impl Decode for ExtensionDecoder {
    fn name(&self) -> &'static str {
        "extension"
    }

    fn decode(&self, path: &Path) -> Result<DynamicImage, ImageError> {
        image::open(path)
    }
}

/// Sniffs the codec from the file content, ignoring the extension.
pub struct ContentDecoder;

impl Decode for ContentDecoder {
    fn name(&self) -> &'static str {
        "content"
    }

    fn decode(&self, path: &Path) -> Result<DynamicImage, ImageError> {
        let bytes = fs::read(path).map_err(ImageError::IoError)?;
        let format = image::guess_format(&bytes)?;
        image::load_from_memory_with_format(&bytes, format)
    }
}

/// Decode the image at `path` and normalize it to a 3-channel RGB buffer.
///
/// Grayscale input is replicated across the three channels and an alpha
/// channel is discarded, so the returned buffer is RGB regardless of which
/// decoder produced it.
pub fn load_rgb8(path: &Path) -> Result<RgbImage, ResolveError> {
    let decoders: [&dyn Decode; 2] = [&ExtensionDecoder, &ContentDecoder];
    let mut last_err = None;

    for decoder in decoders {
        match decoder.decode(path) {
            Ok(img) => {
                if last_err.is_some() {
                    tracing::debug!(
                        "decoder '{}' rescued {}",
                        decoder.name(),
                        path.display()
                    );
                }
                return Ok(img.into_rgb8());
            }
            Err(err) => {
                tracing::debug!(
                    "decoder '{}' failed on {}: {err}",
                    decoder.name(),
                    path.display()
                );
                last_err = Some(err);
            }
        }
    }

    Err(ResolveError::ImageLoad {
        path: path.to_path_buf(),
        source: last_err.expect("at least one decoder ran"),
    })
}
