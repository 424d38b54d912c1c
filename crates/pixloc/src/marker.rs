//! Marker rendering: annotate a resolved pixel and present the result.
//!
//! The display facility is an explicit [`MarkerSink`] resource rather than
//! shared global state, so the renderer stays testable without a display.
//! The shipped [`PngFileSink`] writes the annotated image to disk; the
//! trait is the seam for other backends (e.g. a window).

use std::error::Error;
use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_circle_mut;

/// Marker radius in pixels.
pub const MARKER_RADIUS: i32 = 5;

/// Marker highlight color: pure red in the crate's RGB channel order.
pub const MARKER_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

/// Where an annotated image is presented to the user.
pub trait MarkerSink {
    /// Present `image` under a human-readable `title`.
    fn present(&mut self, image: &RgbImage, title: &str) -> Result<(), Box<dyn Error>>;
}

/// Draw the marker on a copy of `image`; the caller's buffer is never
/// mutated.
///
/// The coordinate is trusted to be in range for `image` (the resolver
/// validates before handing one over); drawing at an out-of-range point is
/// delegated to the drawing primitive, which clips.
pub fn annotate(image: &RgbImage, x: u32, y: u32) -> RgbImage {
    let mut out = image.clone();
    draw_filled_circle_mut(&mut out, (x as i32, y as i32), MARKER_RADIUS, MARKER_COLOR);
    out
}

/// Annotate `image` at (x, y) and hand the result to `sink`, titled with
/// the coordinate.
pub fn render_marker(
    image: &RgbImage,
    x: u32,
    y: u32,
    sink: &mut dyn MarkerSink,
) -> Result<(), Box<dyn Error>> {
    let annotated = annotate(image, x, y);
    let title = format!("Image with pixel ({x}, {y}) highlighted");
    sink.present(&annotated, &title)
}

/// Sink that writes the annotated image as `<stem>.marked.png` and logs the
/// destination together with the title.
pub struct PngFileSink {
    out_dir: PathBuf,
    stem: String,
}

impl PngFileSink {
    /// Sink writing into `out_dir` with the given file stem.
    pub fn new(out_dir: impl Into<PathBuf>, stem: impl Into<String>) -> Self {
        Self {
            out_dir: out_dir.into(),
            stem: stem.into(),
        }
    }

    /// Sink writing next to `input`, named after its file stem.
    pub fn beside(input: &Path) -> Self {
        let out_dir = match input.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        Self { out_dir, stem }
    }

    /// Destination path for the annotated image.
    pub fn destination(&self) -> PathBuf {
        self.out_dir.join(format!("{}.marked.png", self.stem))
    }
}

impl MarkerSink for PngFileSink {
    fn present(&mut self, image: &RgbImage, title: &str) -> Result<(), Box<dyn Error>> {
        let dest = self.destination();
        image.save(&dest)?;
        tracing::info!("{title} -> {}", dest.display());
        Ok(())
    }
}
