//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::history::ClearBehavior;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Canvas geometry.
///
/// `width`/`height` are the backing resolution in pixels. `display_width` is
/// how wide the canvas is shown on screen; input coordinates are scaled by
/// `width / display_width` after subtracting the offset.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Backing width in pixels (valid range: 1 - 16384)
    #[serde(default = "default_canvas_width")]
    pub width: i32,

    /// Backing height in pixels (valid range: 1 - 16384)
    #[serde(default = "default_canvas_height")]
    pub height: i32,

    /// Rendered width of the canvas in display units
    #[serde(default = "default_canvas_width_f64")]
    pub display_width: f64,

    /// Horizontal on-screen offset of the canvas
    #[serde(default)]
    pub offset_x: f64,

    /// Vertical on-screen offset of the canvas
    #[serde(default)]
    pub offset_y: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            display_width: default_canvas_width_f64(),
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

/// Drawing-related settings.
///
/// Controls the pen when the canvas first opens. Colors and widths can be
/// changed at runtime through actions.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default pen color - a named color, `#rrggbb`, or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default line width in pixels (valid range: 1.0 - 100.0)
    #[serde(default = "default_line_width")]
    pub default_line_width: f64,

    /// Paper color: used by the eraser and as the opaque export background
    #[serde(default = "default_background_color")]
    pub background_color: ColorSpec,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_line_width: default_line_width(),
            background_color: default_background_color(),
        }
    }
}

/// Initial input-device permissions.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct InputConfig {
    /// Allow finger touch to draw
    #[serde(default = "default_true")]
    pub touch_enabled: bool,

    /// Allow stylus/pen to draw
    #[serde(default = "default_true")]
    pub pen_enabled: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            touch_enabled: true,
            pen_enabled: true,
        }
    }
}

/// Undo/redo settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct HistoryConfig {
    /// What clearing does to history: "discard" drops both stacks,
    /// "commit-blank" records the blank canvas as an undoable step
    #[serde(default)]
    pub clear_behavior: ClearBehavior,
}

/// Picture export settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory the picture is written to (supports `~/`)
    #[serde(default = "default_export_directory")]
    pub directory: PathBuf,

    /// File name of the exported picture
    #[serde(default = "default_export_filename")]
    pub filename: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
            filename: default_export_filename(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_canvas_width() -> i32 {
    1000
}

fn default_canvas_height() -> i32 {
    600
}

fn default_canvas_width_f64() -> f64 {
    default_canvas_width() as f64
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_line_width() -> f64 {
    5.0
}

fn default_background_color() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_true() -> bool {
    true
}

fn default_export_directory() -> PathBuf {
    PathBuf::from(".")
}

pub(crate) fn default_export_filename() -> String {
    "picture.png".to_string()
}
