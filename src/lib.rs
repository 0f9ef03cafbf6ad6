//! # edge_tint
//!
//! Extracts the dominant color of a directional edge region of an image and
//! derives a darkened variant of it, for use as the end stop of a gradient
//! overlaid behind caption text.
//!
//! The crate is two pure functions plus plumbing:
//! - [`average_color`]: crop a top/bottom/left/right quarter of a decoded
//!   bitmap, resample it to a small fixed canvas, return the mean RGB color
//!   (or `None` when no color can be produced).
//! - [`darken`]: HSB-space darkening with a saturation fallback for colors
//!   already at full brightness.
//!
//! ## Example
//!
//! ```rust,no_run
//! use edge_tint::{tint_from_file, TintConfig};
//! use std::path::Path;
//!
//! let result = tint_from_file(Path::new("photo.jpg"), &TintConfig::default())?;
//! println!("gradient end stop: {}", result.hex);
//! # Ok::<(), edge_tint::TintError>(())
//! ```
//!
//! Both core functions are synchronous, stateless, and safe to call from any
//! number of threads at once; each call works only on its own inputs and a
//! fresh per-call canvas.

use image::DynamicImage;
use palette::Srgba;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod adjust;
pub mod average;
pub mod config;
pub mod constants;
pub mod error;
pub mod gradient;
pub mod loader;
pub mod region;

pub use adjust::{darken, darker};
pub use average::{average_canvas, average_color, average_color_with_dimension};
pub use config::TintConfig;
pub use error::{Result, TintError};
pub use gradient::{FooterGradient, GradientStop};
pub use region::{CropRect, Side};

/// The tint pair derived from one image region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TintResult {
    /// Mean color of the sampled region, alpha fully opaque
    pub average: Srgba,
    /// The average after darkening; the gradient end stop
    pub darkened: Srgba,
    /// Hex form of the darkened color, for display and logging by callers
    #[serde(skip_deserializing)]
    pub hex: String,
}

impl TintResult {
    fn new(average: Srgba, darkened: Srgba) -> Self {
        let hex = hex(darkened);
        Self { average, darkened, hex }
    }

    /// Footer gradient description ending in the darkened color.
    pub fn footer_gradient(&self, height: f32) -> FooterGradient {
        FooterGradient::new(self.darkened, height)
    }
}

/// Format a color as `#RRGGBB` (rounded 8-bit channels, alpha dropped).
pub fn hex(color: Srgba) -> String {
    let r = (color.red * 255.0).round() as u8;
    let g = (color.green * 255.0).round() as u8;
    let b = (color.blue * 255.0).round() as u8;
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Compute the tint pair for an already-decoded image.
///
/// Returns `None` exactly when [`average_color`] does: the configured region
/// crops to zero area (or the resample dimension is zero). Callers substitute
/// their own fallback color, conventionally transparent.
pub fn tint_from_image(image: &DynamicImage, config: &TintConfig) -> Option<TintResult> {
    let average = average_color_with_dimension(image, config.side, config.resample_dimension)?;
    let darkened = darken(average, config.darken_percentage);
    Some(TintResult::new(average, darkened))
}

/// Load an image from disk and compute its tint pair.
///
/// This is the file-based entry point composing the loader, the averaging
/// engine, and the darkening step.
///
/// # Errors
///
/// Returns [`TintError`] if the file cannot be loaded or decoded, if the
/// configuration is degenerate, or if the averaging engine produces no color
/// for the configured region ([`TintError::NoColor`], recoverable).
pub fn tint_from_file(path: &Path, config: &TintConfig) -> Result<TintResult> {
    config.validate()?;
    let image = loader::load_image(path)?;
    tint_from_image(&image, config).ok_or_else(|| TintError::NoColor {
        path: path.to_path_buf(),
        side: config.side.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_hex_formatting() {
        assert_eq!(hex(Srgba::new(1.0, 0.0, 0.0, 1.0)), "#FF0000");
        assert_eq!(hex(Srgba::new(0.0, 1.0, 0.0, 1.0)), "#00FF00");
        assert_eq!(hex(Srgba::new(0.0, 0.0, 1.0, 0.5)), "#0000FF");
        assert_eq!(hex(Srgba::new(0.5, 0.5, 0.5, 1.0)), "#808080");
    }

    #[test]
    fn test_tint_from_image_darkens_average() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            32,
            32,
            Rgba([200, 100, 50, 255]),
        ));
        let result = tint_from_image(&img, &TintConfig::default()).unwrap();

        // The darkened color must actually be darker than the average
        let avg_max = result.average.red.max(result.average.green).max(result.average.blue);
        let dark_max = result.darkened.red.max(result.darkened.green).max(result.darkened.blue);
        assert!(dark_max < avg_max);
        assert_eq!(result.hex, hex(result.darkened));
    }

    #[test]
    fn test_tint_from_image_none_for_empty_region() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(100, 2, Rgba([1, 2, 3, 255])));
        let config = TintConfig {
            side: Side::Top,
            ..TintConfig::default()
        };
        assert!(tint_from_image(&img, &config).is_none());
    }

    #[test]
    fn test_result_serialization() {
        let result = TintResult::new(
            Srgba::new(0.5, 0.25, 0.1, 1.0),
            Srgba::new(0.3, 0.15, 0.06, 1.0),
        );
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains(&result.hex));
    }
}
