//! Edge-region average color extraction
//!
//! The engine crops one fractional edge region of a decoded image, resamples
//! it to a small fixed canvas, and returns the arithmetic mean RGB color of
//! that canvas. Resampling first serves two purposes: it bounds the per-call
//! cost regardless of source resolution, and it normalizes whatever pixel
//! format the source arrived in into the single RGBA8 layout documented in
//! [`crate::constants::layout`] before any arithmetic begins.
//!
//! A plain sum-then-average is deliberate (as opposed to a sum-of-squares
//! mean): it best matches the perceived "gist" of a region's dominant tone
//! for this use case. See <https://sighack.com/post/averaging-rgb-colors-the-right-way>.
//!
//! Failure is a single kind: any stage that cannot produce a valid
//! intermediate makes the call return `None`. No partial results, no panics.

use image::{imageops::FilterType, DynamicImage, GenericImageView, RgbaImage};
use palette::Srgba;

use crate::constants::{layout, RESAMPLE_DIMENSION};
use crate::region::Side;

/// Average color of one edge region of `image`, or `None` if no color can
/// be produced (empty source, zero-area crop).
///
/// The result carries the mean of each RGB channel as [0.0, 1.0] floats with
/// alpha fixed to fully opaque. Source alpha is ignored.
pub fn average_color(image: &DynamicImage, side: Side) -> Option<Srgba> {
    average_color_with_dimension(image, side, RESAMPLE_DIMENSION)
}

/// [`average_color`] with an explicit resample target.
///
/// `dimension` is the side length of the square canvas the cropped region is
/// resampled to; `0` yields `None`. The default is
/// [`RESAMPLE_DIMENSION`](crate::constants::RESAMPLE_DIMENSION).
pub fn average_color_with_dimension(
    image: &DynamicImage,
    side: Side,
    dimension: u32,
) -> Option<Srgba> {
    if dimension == 0 {
        return None;
    }

    let (width, height) = image.dimensions();
    let rect = side.crop_rect(width, height);
    if rect.is_empty() {
        return None;
    }

    // Borrowing crop; the source is never mutated.
    let cropped = image.crop_imm(rect.x, rect.y, rect.width, rect.height);

    // Aspect ratio is irrelevant for an average, so resample to an exact
    // square. Triangle is a box/bilinear filter: every source pixel
    // contributes, which is what an average wants.
    let canvas = cropped
        .resize_exact(dimension, dimension, FilterType::Triangle)
        .to_rgba8();

    average_canvas(&canvas)
}

/// Arithmetic mean RGB of an already-resampled RGBA8 canvas.
///
/// Walks the raw buffer with the byte offsets fixed in
/// [`crate::constants::layout`]. Iteration order does not affect the result;
/// the sum is commutative. Returns `None` for an empty canvas.
pub fn average_canvas(canvas: &RgbaImage) -> Option<Srgba> {
    let total_pixels = (canvas.width() as u64) * (canvas.height() as u64);
    if total_pixels == 0 {
        return None;
    }

    // u64 accumulators hold any canvas this API can express; for the default
    // 40x40 target the per-channel maximum is 408,000.
    let mut total_red: u64 = 0;
    let mut total_green: u64 = 0;
    let mut total_blue: u64 = 0;

    for pixel in canvas.as_raw().chunks_exact(layout::BYTES_PER_PIXEL) {
        total_red += pixel[layout::RED_OFFSET] as u64;
        total_green += pixel[layout::GREEN_OFFSET] as u64;
        total_blue += pixel[layout::BLUE_OFFSET] as u64;
    }

    let average_red = total_red as f32 / total_pixels as f32;
    let average_green = total_green as f32 / total_pixels as f32;
    let average_blue = total_blue as f32 / total_pixels as f32;

    // [0, 255] means to the [0.0, 1.0] convention Srgba uses; alpha opaque.
    Some(Srgba::new(
        average_red / 255.0,
        average_green / 255.0,
        average_blue / 255.0,
        1.0,
    ))
}
