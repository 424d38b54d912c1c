//! pixloc — locate a pixel in a raster image and report its color.
//!
//! The pipeline is deliberately small:
//!
//! 1. **Load** – decode the image file, falling back from an
//!    extension-driven decoder to a content-sniffing one, and flatten the
//!    result to a 3-channel RGB buffer.
//! 2. **Resolve** – normalize a signed coordinate request (negative
//!    components count back from the far edge), validate bounds, and read
//!    the pixel value.
//! 3. **Mark** (optional) – draw a filled red circle at the resolved
//!    coordinate on a copy of the image and hand it to a [`MarkerSink`].
//!
//! # Public API
//! - [`resolve`] / [`resolve_in_image`] and the [`Resolution`] result
//! - [`render_marker`], [`annotate`] and the [`MarkerSink`] seam
//! - [`ResolveError`] for the two failure modes (load, bounds)
//!
//! The in-memory channel order is **RGB**; grayscale input is replicated
//! across the three channels and an alpha channel is discarded.

mod error;
mod loader;
mod marker;
mod resolve;
#[cfg(test)]
mod test_utils;

pub use error::ResolveError;
pub use loader::{load_rgb8, ContentDecoder, Decode, ExtensionDecoder};
pub use marker::{annotate, render_marker, MarkerSink, PngFileSink, MARKER_COLOR, MARKER_RADIUS};
pub use resolve::{resolve, resolve_in_image, Resolution};
