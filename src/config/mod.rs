//! Configuration file support for inkpad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/inkpad/config.toml`. Settings include canvas geometry,
//! pen defaults, input-device permissions, history behavior, and export location.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, DrawingConfig, ExportConfig, HistoryConfig, InputConfig};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Largest canvas edge accepted from the config file.
const MAX_CANVAS_EDGE: i32 = 16384;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 1000
/// height = 600
/// display_width = 500
///
/// [drawing]
/// default_color = "#000000"
/// default_line_width = 5.0
/// background_color = "white"
///
/// [input]
/// touch_enabled = false
/// pen_enabled = true
///
/// [history]
/// clear_behavior = "discard"
///
/// [export]
/// directory = "~/Pictures"
/// filename = "picture.png"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Canvas size and on-screen placement
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Pen defaults (color, line width, paper color)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Which input devices may draw at startup
    #[serde(default)]
    pub input: InputConfig,

    /// Undo/redo behavior
    #[serde(default)]
    pub history: HistoryConfig,

    /// Where exported pictures go
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width`, `canvas.height`: 1 - 16384
    /// - `canvas.display_width`: positive and finite (falls back to `canvas.width`)
    /// - `drawing.default_line_width`: 1.0 - 100.0
    /// - `export.filename`: non-empty
    fn validate_and_clamp(&mut self) {
        if !(1..=MAX_CANVAS_EDGE).contains(&self.canvas.width) {
            warn!(
                "Invalid canvas width {}, clamping to 1-{} range",
                self.canvas.width, MAX_CANVAS_EDGE
            );
            self.canvas.width = self.canvas.width.clamp(1, MAX_CANVAS_EDGE);
        }

        if !(1..=MAX_CANVAS_EDGE).contains(&self.canvas.height) {
            warn!(
                "Invalid canvas height {}, clamping to 1-{} range",
                self.canvas.height, MAX_CANVAS_EDGE
            );
            self.canvas.height = self.canvas.height.clamp(1, MAX_CANVAS_EDGE);
        }

        if !(self.canvas.display_width.is_finite() && self.canvas.display_width > 0.0) {
            warn!(
                "Invalid display_width {}, using canvas width {}",
                self.canvas.display_width, self.canvas.width
            );
            self.canvas.display_width = self.canvas.width as f64;
        }

        if !(1.0..=100.0).contains(&self.drawing.default_line_width) {
            warn!(
                "Invalid default_line_width {:.1}, clamping to 1.0-100.0 range",
                self.drawing.default_line_width
            );
            self.drawing.default_line_width = if self.drawing.default_line_width.is_nan() {
                1.0
            } else {
                self.drawing.default_line_width.clamp(1.0, 100.0)
            };
        }

        if self.export.filename.trim().is_empty() {
            warn!("Empty export filename, falling back to 'picture.png'");
            self.export.filename = types::default_export_filename();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/inkpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("inkpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if the file is missing.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or contains invalid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(config_str)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
