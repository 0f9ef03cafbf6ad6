//! Directional edge regions of an image
//!
//! A [`Side`] names one of four fixed fractional crop policies: the top or
//! bottom quarter of an image's height at full width, or the left or right
//! quarter of its width at full height. Each variant maps to a concrete
//! integer crop rectangle via [`Side::crop_rect`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// The part of an image used for average-color extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Full width, top 25% of height
    Top,
    /// Full width, bottom 25% of height
    Bottom,
    /// Left 25% of width, full height
    Left,
    /// Right 25% of width, full height
    Right,
}

/// An integer crop rectangle, guaranteed within its source bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    /// True if the rectangle covers no pixels
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl Side {
    /// Compute the crop rectangle for this side over a `width` × `height` source.
    ///
    /// Uses integer floor arithmetic. `Bottom` and `Right` run from the 3/4
    /// offset to the far edge, so they are never empty for a non-empty source;
    /// `Top` and `Left` floor to a quarter of the sliced dimension and can be
    /// empty when that dimension is under 4 pixels.
    pub fn crop_rect(self, width: u32, height: u32) -> CropRect {
        match self {
            Side::Top => CropRect {
                x: 0,
                y: 0,
                width,
                height: height / 4,
            },
            Side::Bottom => {
                let y = height / 4 * 3;
                CropRect {
                    x: 0,
                    y,
                    width,
                    height: height - y,
                }
            }
            Side::Left => CropRect {
                x: 0,
                y: 0,
                width: width / 4,
                height,
            },
            Side::Right => {
                let x = width / 4 * 3;
                CropRect {
                    x,
                    y: 0,
                    width: width - x,
                    height,
                }
            }
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        };
        f.write_str(name)
    }
}
