//! Integration tests for the complete tint pipeline
//!
//! These tests validate the end-to-end workflow from file on disk to
//! gradient end stop:
//! - Image loading and format detection
//! - Edge-region cropping and resampling
//! - Average color extraction
//! - HSB darkening
//! - Error handling for edge cases

use edge_tint::{
    average_color, darken, hex, tint_from_file, Side, TintConfig, TintError,
};
use image::{DynamicImage, Rgba, RgbaImage};
use palette::{FromColor, Hsv};
use std::path::Path;

fn save_png(dir: &tempfile::TempDir, name: &str, img: &RgbaImage) -> std::path::PathBuf {
    let path = dir.path().join(name);
    img.save(&path).expect("write test image");
    path
}

fn assert_channel_near(actual: f32, expected_byte: u8) {
    let expected = expected_byte as f32 / 255.0;
    assert!(
        (actual - expected).abs() <= 1.5 / 255.0,
        "channel {actual} != ~{expected}"
    );
}

// ============================================================================
// Error Handling
// ============================================================================

#[test]
fn test_tint_from_file_not_found() {
    let result = tint_from_file(Path::new("nonexistent_file.jpg"), &TintConfig::default());

    assert!(matches!(result, Err(TintError::ImageLoad { .. })));
}

#[test]
fn test_tint_from_file_unsupported_format() {
    let result = tint_from_file(Path::new("notes.txt"), &TintConfig::default());

    assert!(matches!(result, Err(TintError::UnsupportedFormat { .. })));
}

#[test]
fn test_tint_from_file_empty_path() {
    let result = tint_from_file(Path::new(""), &TintConfig::default());

    assert!(result.is_err());
}

#[test]
fn test_tint_from_file_degenerate_config() {
    let config = TintConfig {
        resample_dimension: 0,
        ..TintConfig::default()
    };
    let result = tint_from_file(Path::new("whatever.png"), &config);

    assert!(matches!(result, Err(TintError::InvalidParameter { .. })));
}

#[test]
fn test_no_color_region_is_recoverable_error() {
    let dir = tempfile::tempdir().unwrap();
    // 2 rows: the top quarter floors to zero height
    let path = save_png(&dir, "short.png", &RgbaImage::from_pixel(100, 2, Rgba([9, 9, 9, 255])));

    let config = TintConfig {
        side: Side::Top,
        ..TintConfig::default()
    };
    let err = tint_from_file(&path, &config).unwrap_err();

    assert!(matches!(err, TintError::NoColor { .. }));
    assert!(err.is_recoverable());
}

// ============================================================================
// End-to-End Extraction
// ============================================================================

#[test]
fn test_uniform_image_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = save_png(
        &dir,
        "uniform.png",
        &RgbaImage::from_pixel(120, 90, Rgba([60, 120, 180, 255])),
    );

    let result = tint_from_file(&path, &TintConfig::default()).unwrap();

    assert_channel_near(result.average.red, 60);
    assert_channel_near(result.average.green, 120);
    assert_channel_near(result.average.blue, 180);
    assert_eq!(result.average.alpha, 1.0);

    // Default config darkens by 40% of the color's own brightness
    let avg_hsv = Hsv::from_color(result.average.color);
    let dark_hsv = Hsv::from_color(result.darkened.color);
    assert!((dark_hsv.value - avg_hsv.value * 0.6).abs() < 0.01);
    assert!((dark_hsv.saturation - avg_hsv.saturation).abs() < 0.01);

    assert_eq!(result.hex, hex(result.darkened));
    assert!(result.hex.starts_with('#'));
    assert_eq!(result.hex.len(), 7);
}

#[test]
fn test_two_tone_image_bottom_region() {
    let dir = tempfile::tempdir().unwrap();
    let height = 100;
    let mut buf = RgbaImage::new(64, height);
    for (_, y, pixel) in buf.enumerate_pixels_mut() {
        *pixel = if y < height / 2 {
            Rgba([240, 240, 240, 255]) // bright top half
        } else {
            Rgba([20, 40, 60, 255]) // dark bottom half
        };
    }
    let path = save_png(&dir, "two_tone.png", &buf);

    let result = tint_from_file(&path, &TintConfig::default()).unwrap();
    assert_channel_near(result.average.red, 20);
    assert_channel_near(result.average.green, 40);
    assert_channel_near(result.average.blue, 60);

    let config = TintConfig {
        side: Side::Top,
        ..TintConfig::default()
    };
    let result = tint_from_file(&path, &config).unwrap();
    assert_channel_near(result.average.red, 240);
}

#[test]
fn test_footer_gradient_from_result() {
    let dir = tempfile::tempdir().unwrap();
    let path = save_png(
        &dir,
        "photo.png",
        &RgbaImage::from_pixel(50, 50, Rgba([200, 80, 40, 255])),
    );

    let config = TintConfig::default();
    let result = tint_from_file(&path, &config).unwrap();
    let gradient = result.footer_gradient(config.gradient_height);

    assert_eq!(gradient.height, 100.0);
    assert_eq!(gradient.stops[0].color.alpha, 0.0);
    assert_eq!(gradient.end_color(), result.darkened);
}

// ============================================================================
// Core Property Checks Across the Public API
// ============================================================================

#[test]
fn test_average_matches_direct_engine_call() {
    let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(80, 80, Rgba([11, 22, 33, 255])));
    let direct = average_color(&img, Side::Bottom).unwrap();
    let piped = edge_tint::tint_from_image(&img, &TintConfig::default()).unwrap();

    assert_eq!(piped.average, direct);
    assert_eq!(piped.darkened, darken(direct, 40.0));
}

#[test]
fn test_custom_resample_dimension() {
    let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(200, 200, Rgba([90, 90, 200, 255])));
    for dimension in [1u32, 8, 40, 128] {
        let config = TintConfig {
            resample_dimension: dimension,
            ..TintConfig::default()
        };
        let result = edge_tint::tint_from_image(&img, &config).unwrap();
        // A uniform source averages to itself at any canvas size
        assert_channel_near(result.average.red, 90);
        assert_channel_near(result.average.blue, 200);
    }
}

// ============================================================================
// Configuration Loading
// ============================================================================

#[test]
fn test_config_from_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"side": "right", "darken_percentage": 25.0}"#).unwrap();

    let config = TintConfig::from_json_file(&path).unwrap();
    assert_eq!(config.side, Side::Right);
    assert_eq!(config.darken_percentage, 25.0);
    // Unspecified fields keep their defaults
    assert_eq!(config.resample_dimension, 40);
}

#[test]
fn test_config_from_invalid_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{not json").unwrap();

    assert!(matches!(
        TintConfig::from_json_file(&path),
        Err(TintError::Config { .. })
    ));
}
