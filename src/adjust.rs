//! HSB color adjustment for gradient end stops
//!
//! Darkening works in hue/saturation/brightness space rather than by scaling
//! RGB channels, so hue holds steady while the tone drops. The branch logic
//! mirrors the visual effect the footer gradient is tuned for: brightness is
//! reduced when there is headroom, and for colors already at full brightness
//! saturation is reduced instead, which still reads as a darker-feeling tone.
//! This is a presentation heuristic, not standard color theory; keep it as is.

use palette::{FromColor, Hsv, Srgb, Srgba};

use crate::constants::DEFAULT_DARKEN_PERCENT;

/// Darken `color` by `percentage` percent of its own brightness.
///
/// * Brightness below 1.0: `brightness -= (percentage / 100) * brightness`,
///   clamped to [0, 1], hue and saturation held fixed.
/// * Brightness at 1.0: the same proportional reduction is applied to
///   saturation instead, hue and brightness held fixed.
/// * Achromatic input (zero saturation, hue undefined) is returned unchanged.
///
/// A negative `percentage` brightens; that is documented behavior, not a bug.
/// Input alpha is preserved. Pure and deterministic.
pub fn darken(color: Srgba, percentage: f32) -> Srgba {
    let hsv = Hsv::from_color(color.color);

    // No meaningful hue decomposition: graceful pass-through, not a failure.
    if hsv.saturation == 0.0 {
        return color;
    }

    let factor = percentage / 100.0;
    let adjusted = if hsv.value < 1.0 {
        let value = (hsv.value - factor * hsv.value).clamp(0.0, 1.0);
        Hsv::new(hsv.hue, hsv.saturation, value)
    } else {
        let saturation = (hsv.saturation - factor * hsv.saturation).clamp(0.0, 1.0);
        Hsv::new(hsv.hue, saturation, hsv.value)
    };

    let rgb = Srgb::from_color(adjusted);
    Srgba::new(rgb.red, rgb.green, rgb.blue, color.alpha)
}

/// [`darken`] with the default percentage
/// ([`DEFAULT_DARKEN_PERCENT`](crate::constants::DEFAULT_DARKEN_PERCENT)).
pub fn darker(color: Srgba) -> Srgba {
    darken(color, DEFAULT_DARKEN_PERCENT)
}
