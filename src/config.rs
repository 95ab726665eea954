// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Runtime editor configuration.
//!
//! An `EditorConfig` starts from the constants in `settings.rs`. A TOML
//! file may override any subset of the fields:
//!
//! ```toml
//! segment_resolution = 60
//! hit_tolerance = 8.0
//! curve_color = "red"
//! curve_width = 3
//! ```

use crate::error::ConfigError;
use crate::settings;
use serde::Deserialize;
use std::path::Path;

/// Tunable editor values
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Samples per cubic segment when flattening curves for display
    pub segment_resolution: u32,

    /// Half-width of the click hit box around each control point
    pub hit_tolerance: f64,

    /// Stroke color given to newly created curves
    pub curve_color: String,

    /// Stroke width given to newly created curves
    pub curve_width: u32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            segment_resolution: settings::sampling::RESOLUTION,
            hit_tolerance: settings::hit_test::TOLERANCE,
            curve_color: settings::curve::COLOR.to_string(),
            curve_width: settings::curve::WIDTH,
        }
    }
}

impl EditorConfig {
    /// Parse a config from TOML text and validate it
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: EditorConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let max_resolution = settings::sampling::MAX_RESOLUTION;
        if !(1..=max_resolution).contains(&self.segment_resolution) {
            return Err(ConfigError::Invalid {
                field: "segment_resolution",
                reason: format!(
                    "must be between 1 and {max_resolution}, got {}",
                    self.segment_resolution
                ),
            });
        }
        if !self.hit_tolerance.is_finite() || self.hit_tolerance < 0.0 {
            return Err(ConfigError::Invalid {
                field: "hit_tolerance",
                reason: format!("must be a non-negative number, got {}", self.hit_tolerance),
            });
        }
        if self.curve_width == 0 {
            return Err(ConfigError::Invalid {
                field: "curve_width",
                reason: "must be a positive integer".to_string(),
            });
        }
        Ok(())
    }
}
