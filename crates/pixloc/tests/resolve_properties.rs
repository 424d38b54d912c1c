//! End-to-end resolve properties over on-disk fixtures.

use std::path::PathBuf;

use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use pixloc::{resolve, ResolveError};

fn gradient(w: u32, h: u32) -> RgbImage {
    RgbImage::from_fn(w, h, |x, y| Rgb([x as u8, y as u8, (x + y) as u8]))
}

fn write_png(dir: &tempfile::TempDir, name: &str, img: &RgbImage) -> PathBuf {
    let path = dir.path().join(name);
    img.save(&path).unwrap();
    path
}

#[test]
fn red_10x10_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(&dir, "red.png", &RgbImage::from_pixel(10, 10, Rgb([255, 0, 0])));

    let center = resolve(&path, 5, 5).unwrap();
    assert_eq!((center.x, center.y, center.value), (5, 5, [255, 0, 0]));

    let last = resolve(&path, -1, -1).unwrap();
    assert_eq!((last.x, last.y, last.value), (9, 9, [255, 0, 0]));

    let err = resolve(&path, 10, 0).unwrap_err();
    assert!(matches!(err, ResolveError::OutOfBounds { .. }));
}

#[test]
fn in_range_coordinates_pass_through_with_direct_lookup_value() {
    let dir = tempfile::tempdir().unwrap();
    let img = gradient(12, 9);
    let path = write_png(&dir, "gradient.png", &img);

    for (x, y) in [(0, 0), (11, 8), (4, 7), (7, 4)] {
        let res = resolve(&path, x, y).unwrap();
        assert_eq!((res.x, res.y), (x as u32, y as u32));
        assert_eq!(res.value, img.get_pixel(x as u32, y as u32).0);
    }
}

#[test]
fn negative_index_law() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(&dir, "gradient.png", &gradient(12, 9));

    let neg = resolve(&path, -1, -1).unwrap();
    let pos = resolve(&path, 11, 8).unwrap();
    assert_eq!((neg.x, neg.y, neg.value), (pos.x, pos.y, pos.value));
}

#[test]
fn double_wrap_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(&dir, "gradient.png", &gradient(12, 9));

    let err = resolve(&path, -13, 0).unwrap_err();
    assert!(matches!(err, ResolveError::OutOfBounds { .. }));
}

#[test]
fn boundary_coordinates() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(&dir, "gradient.png", &gradient(12, 9));

    assert!(resolve(&path, 12, 0).is_err());
    assert!(resolve(&path, 0, 9).is_err());
    assert!(resolve(&path, 11, 8).is_ok());
}

#[test]
fn decoder_fallback_resolves_identically() {
    let dir = tempfile::tempdir().unwrap();
    let img = gradient(8, 8);

    // Same bytes, once with an honest extension and once with one the
    // extension decoder cannot place.
    let honest = write_png(&dir, "frame.png", &img);
    let disguised = dir.path().join("frame.dat");
    img.save_with_format(&disguised, ImageFormat::Png).unwrap();

    let a = resolve(&honest, 3, 6).unwrap();
    let b = resolve(&disguised, 3, 6).unwrap();
    assert_eq!((a.x, a.y, a.value), (b.x, b.y, b.value));
}

#[test]
fn alpha_flattening_matches_three_channel_equivalent() {
    let dir = tempfile::tempdir().unwrap();

    let rgba = RgbaImage::from_fn(6, 6, |x, y| Rgba([x as u8 * 10, y as u8 * 10, 128, 63]));
    let rgba_path = dir.path().join("rgba.png");
    rgba.save(&rgba_path).unwrap();

    let rgb = RgbImage::from_fn(6, 6, |x, y| Rgb([x as u8 * 10, y as u8 * 10, 128]));
    let rgb_path = write_png(&dir, "rgb.png", &rgb);

    for y in 0..6i64 {
        for x in 0..6i64 {
            let a = resolve(&rgba_path, x, y).unwrap();
            let b = resolve(&rgb_path, x, y).unwrap();
            assert_eq!(a.value, b.value, "mismatch at ({x}, {y})");
        }
    }
}

#[test]
fn missing_file_reports_image_load() {
    let err = resolve(std::path::Path::new("/no/such/file.png"), 0, 0).unwrap_err();
    assert!(matches!(err, ResolveError::ImageLoad { .. }));
}
