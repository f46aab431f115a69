//! Configuration types for Madder.
//!
//! This module provides the configuration structures that control
//! rasterization. All types implement [`serde::Deserialize`] so the CLI
//! can load them from TOML files.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`RasterConfig`] - Controls PNG output: default scale factor and
//!   optional background color.

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Rasterization configuration section.
    #[serde(default)]
    raster: RasterConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified raster configuration.
    pub fn new(raster: RasterConfig) -> Self {
        Self { raster }
    }

    /// Returns the raster configuration.
    pub fn raster(&self) -> &RasterConfig {
        &self.raster
    }
}

/// Rasterization options for PNG output.
///
/// Fields that are not set fall back to built-in defaults: a scale of
/// `1` and a transparent background.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RasterConfig {
    /// Default scale multiplier, used when no `--scale` flag is given.
    #[serde(default)]
    scale: Option<f32>,

    /// Background color painted behind the icon, as a hex color string
    /// (leading `#` optional). Unset means transparent.
    #[serde(default)]
    background: Option<String>,
}

impl RasterConfig {
    /// Creates a new [`RasterConfig`].
    pub fn new(scale: Option<f32>, background: Option<String>) -> Self {
        Self { scale, background }
    }

    /// Returns the configured default scale, if any.
    pub fn scale(&self) -> Option<f32> {
        self.scale
    }

    /// Returns the configured background color string, if any.
    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_unset() {
        let config = AppConfig::default();
        assert_eq!(config.raster().scale(), None);
        assert_eq!(config.raster().background(), None);
    }

    #[test]
    fn accessors_return_configured_values() {
        let config = AppConfig::new(RasterConfig::new(Some(2.0), Some("#202020".to_string())));
        assert_eq!(config.raster().scale(), Some(2.0));
        assert_eq!(config.raster().background(), Some("#202020"));
    }
}
