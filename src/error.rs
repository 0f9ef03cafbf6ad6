//! Error types for the edge_tint library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for edge_tint operations
pub type Result<T> = std::result::Result<T, TintError>;

/// Error types for the tint extraction pipeline
///
/// The averaging engine itself signals failure by returning `None`; these
/// errors only arise in the file-based pipeline around it.
#[derive(Error, Debug)]
pub enum TintError {
    /// Image file could not be opened or decoded
    #[error("Failed to load image: {message}")]
    ImageLoad {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// File extension does not map to a supported image format
    #[error("Unsupported image format: {path}")]
    UnsupportedFormat { path: PathBuf },

    /// The averaging engine could not produce a color for this image/region
    #[error("No average color for the {side} region of {path}")]
    NoColor { path: PathBuf, side: String },

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },
}

impl TintError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoad {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Check if this error indicates a recoverable condition
    ///
    /// `NoColor` is recoverable by design: the caller substitutes its own
    /// fallback color (the presentation layer's convention is transparent).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, TintError::NoColor { .. })
    }
}
