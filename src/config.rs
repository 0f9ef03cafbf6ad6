//! Configuration for the tint extraction pipeline
//!
//! All tunables in one serializable struct, loadable from JSON for
//! reproducible runs or constructed programmatically:
//!
//! ```no_run
//! use edge_tint::TintConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = TintConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use the defaults (bottom region, 40x40 canvas, 40% darken)
//! let config = TintConfig::default();
//! # Ok::<(), edge_tint::TintError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::constants::{gradient, DEFAULT_DARKEN_PERCENT, RESAMPLE_DIMENSION};
use crate::error::{Result, TintError};
use crate::region::Side;

/// Pipeline configuration: which region to average and how to derive the
/// gradient end stop from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TintConfig {
    /// Edge region to average
    pub side: Side,

    /// Side length of the square resample canvas
    pub resample_dimension: u32,

    /// Percentage by which the averaged color is darkened
    pub darken_percentage: f32,

    /// Footer gradient band height in presentation points
    pub gradient_height: f32,
}

impl Default for TintConfig {
    fn default() -> Self {
        Self {
            side: Side::Bottom,
            resample_dimension: RESAMPLE_DIMENSION,
            darken_percentage: DEFAULT_DARKEN_PERCENT,
            gradient_height: gradient::DEFAULT_HEIGHT,
        }
    }
}

impl TintConfig {
    /// Load a configuration from a JSON file.
    ///
    /// Absent fields fall back to their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            TintError::config(format!("Failed to read config file: {}", path.display()), e)
        })?;
        let config: TintConfig = serde_json::from_str(&contents).map_err(|e| {
            TintError::config(format!("Failed to parse config file: {}", path.display()), e)
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check parameter ranges that would make the pipeline degenerate.
    pub fn validate(&self) -> Result<()> {
        if self.resample_dimension == 0 {
            return Err(TintError::InvalidParameter {
                parameter: "resample_dimension".into(),
                value: self.resample_dimension.to_string(),
            });
        }
        if !self.darken_percentage.is_finite() {
            return Err(TintError::InvalidParameter {
                parameter: "darken_percentage".into(),
                value: self.darken_percentage.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_values() {
        let config = TintConfig::default();
        assert_eq!(config.side, Side::Bottom);
        assert_eq!(config.resample_dimension, 40);
        assert_eq!(config.darken_percentage, 40.0);
        assert_eq!(config.gradient_height, 100.0);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = TintConfig {
            side: Side::Top,
            resample_dimension: 64,
            darken_percentage: 25.0,
            gradient_height: 120.0,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: TintConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: TintConfig = serde_json::from_str(r#"{"side": "left"}"#).unwrap();
        assert_eq!(config.side, Side::Left);
        assert_eq!(config.resample_dimension, 40);
    }

    #[test]
    fn test_validate_rejects_zero_dimension() {
        let config = TintConfig {
            resample_dimension: 0,
            ..TintConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(TintError::InvalidParameter { .. })
        ));
    }
}
