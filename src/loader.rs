//! Image loading for the file-based pipeline
//!
//! A single entry point that detects the format from the file extension and
//! decodes via the `image` crate. Decoding itself is delegated wholesale;
//! this module only maps formats and errors into the crate's vocabulary.
//! Remote fetching and caching are the caller's concern — by the time this
//! crate is involved the bytes are on disk.

use crate::error::{Result, TintError};
use image::DynamicImage;
use std::path::Path;

/// Supported image formats, detected by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// JPEG image
    Jpeg,
    /// PNG image
    Png,
    /// GIF image (first frame only)
    Gif,
    /// WebP image
    WebP,
    /// TIFF image
    Tiff,
    /// BMP image
    Bmp,
    /// QOI image
    Qoi,
    /// TGA image
    Tga,
}

impl ImageFormat {
    /// Detect format from file extension
    pub fn from_extension(path: &Path) -> Option<ImageFormat> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            "gif" => Some(ImageFormat::Gif),
            "webp" => Some(ImageFormat::WebP),
            "tiff" | "tif" => Some(ImageFormat::Tiff),
            "bmp" => Some(ImageFormat::Bmp),
            "qoi" => Some(ImageFormat::Qoi),
            "tga" => Some(ImageFormat::Tga),
            _ => None,
        }
    }
}

/// Load and decode an image from disk.
///
/// # Errors
///
/// Returns [`TintError::UnsupportedFormat`] when the extension maps to no
/// known format, and [`TintError::ImageLoad`] when the file cannot be opened
/// or decoded.
///
/// # Example
///
/// ```rust,no_run
/// use edge_tint::loader::load_image;
/// use image::GenericImageView;
/// use std::path::Path;
///
/// let img = load_image(Path::new("photo.jpg"))?;
/// let (width, height) = img.dimensions();
/// println!("Loaded image: {width}x{height}");
/// # Ok::<(), edge_tint::TintError>(())
/// ```
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    if ImageFormat::from_extension(path).is_none() {
        return Err(TintError::UnsupportedFormat {
            path: path.to_path_buf(),
        });
    }

    let reader = image::ImageReader::open(path).map_err(|e| {
        TintError::image_load(format!("Failed to open image file: {}", path.display()), e)
    })?;

    reader.decode().map_err(|e| {
        TintError::image_load(format!("Failed to decode image: {}", path.display()), e)
    })
}
