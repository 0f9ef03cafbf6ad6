//! Footer gradient description
//!
//! Pure data handed to the presentation layer: a two-stop linear gradient
//! running top-to-bottom over a fixed-height band aligned to the image's
//! bottom edge. The first stop is the end color at zero alpha so the band
//! fades in from nothing; the second is the end color itself. Rendering is
//! entirely the caller's concern.

use palette::Srgba;
use serde::{Deserialize, Serialize};

use crate::constants::gradient::DEFAULT_HEIGHT;

/// One color stop of a linear gradient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Stop color, [0.0, 1.0] float channels
    pub color: Srgba,
    /// Position along the gradient axis, 0.0 = start, 1.0 = end
    pub location: f32,
}

/// A caption-legibility gradient band for the bottom of an image
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FooterGradient {
    /// Stops in axis order: transparent fade-in, then the opaque end color
    pub stops: [GradientStop; 2],
    /// Band height in presentation points
    pub height: f32,
}

impl FooterGradient {
    /// Build the band for a given end-stop color and height.
    pub fn new(end_color: Srgba, height: f32) -> Self {
        let transparent = Srgba::new(end_color.red, end_color.green, end_color.blue, 0.0);
        Self {
            stops: [
                GradientStop { color: transparent, location: 0.0 },
                GradientStop { color: end_color, location: 1.0 },
            ],
            height,
        }
    }

    /// [`FooterGradient::new`] with the default band height.
    pub fn with_default_height(end_color: Srgba) -> Self {
        Self::new(end_color, DEFAULT_HEIGHT)
    }

    /// The opaque end-stop color
    pub fn end_color(&self) -> Srgba {
        self.stops[1].color
    }
}
