//! Tunable constants for edge-region color extraction
//!
//! This module pins down the numeric choices of the pipeline so they can be
//! adjusted without re-deriving the algorithm.

/// Resample canvas parameters
pub mod resample {
    /// Side length of the square canvas the cropped region is resampled to.
    ///
    /// 40×40 preserves enough detail for a faithful average while keeping the
    /// per-call pixel walk small and constant regardless of source size.
    /// Tunable: larger values trade speed for precision.
    pub const RESAMPLE_DIMENSION: u32 = 40;

    /// Worst-case per-channel sum for the default canvas:
    /// 40 * 40 * 255 = 408,000, comfortably inside `u32`.
    pub const MAX_CHANNEL_SUM: u32 =
        RESAMPLE_DIMENSION * RESAMPLE_DIMENSION * u8::MAX as u32;
}

/// Re-export at top level for convenience
pub const RESAMPLE_DIMENSION: u32 = resample::RESAMPLE_DIMENSION;

/// Byte layout of the resample canvas
///
/// The canvas is an `image::RgbaImage`, whose raw buffer is row-major,
/// top-to-bottom, 4 bytes per pixel. The channel order is fixed here as an
/// explicit contract; reading the wrong offsets silently swaps channels.
pub mod layout {
    /// Bytes per canvas pixel (RGBA8)
    pub const BYTES_PER_PIXEL: usize = 4;

    /// Byte 0 of each pixel: red
    pub const RED_OFFSET: usize = 0;
    /// Byte 1 of each pixel: green
    pub const GREEN_OFFSET: usize = 1;
    /// Byte 2 of each pixel: blue
    pub const BLUE_OFFSET: usize = 2;
    /// Byte 3 of each pixel: alpha (ignored by the averaging engine)
    pub const ALPHA_OFFSET: usize = 3;
}

/// Color adjustment parameters
pub mod adjust {
    /// Default darkening percentage applied to the averaged color before it
    /// becomes a gradient end stop.
    pub const DEFAULT_DARKEN_PERCENT: f32 = 40.0;
}

/// Re-export the darken default at top level
pub const DEFAULT_DARKEN_PERCENT: f32 = adjust::DEFAULT_DARKEN_PERCENT;

/// Gradient overlay defaults
pub mod gradient {
    /// Default footer gradient band height in presentation points
    pub const DEFAULT_HEIGHT: f32 = 100.0;
}

/// Region selection parameters
pub mod region {
    /// Fraction of the sliced dimension each edge region covers
    pub const EDGE_FRACTION: f32 = 0.25;
}
