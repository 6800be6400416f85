//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Stroke style defaults.
///
/// Controls the pen and eraser when a surface is created. Hosts can change
/// them at runtime through `InputState::update_style`.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Pen color - either a named color (red, green, blue, yellow, orange, pink, white, black)
    /// or an RGB array like `[255, 0, 0]` for red
    #[serde(default = "default_line_color")]
    pub line_color: ColorSpec,

    /// Pen line width in canvas units (valid range: 0.5 - 100.0)
    #[serde(default = "default_line_width")]
    pub line_width: f64,

    /// Eraser stroke width in canvas units (valid range: 1.0 - 200.0)
    #[serde(default = "default_eraser_width")]
    pub eraser_width: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            line_color: default_line_color(),
            line_width: default_line_width(),
            eraser_width: default_eraser_width(),
        }
    }
}

/// UI chrome preferences. Never affects stroke data.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UiConfig {
    /// Draw a circle following the pointer while the erase tool is active
    #[serde(default = "default_show_erase_cursor")]
    pub show_erase_cursor: bool,

    /// Outline color of the erase cursor
    #[serde(default = "default_erase_cursor_color")]
    pub erase_cursor_color: ColorSpec,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_erase_cursor: default_show_erase_cursor(),
            erase_cursor_color: default_erase_cursor_color(),
        }
    }
}

/// Canvas dimensions and background used for headless rendering.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 1 - 16384)
    #[serde(default = "default_canvas_width")]
    pub width: u32,

    /// Canvas height in pixels (valid range: 1 - 16384)
    #[serde(default = "default_canvas_height")]
    pub height: u32,

    /// Background fill; omit for a transparent canvas
    #[serde(default)]
    pub background: Option<ColorSpec>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            background: None,
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_line_color() -> ColorSpec {
    ColorSpec::Name("red".to_string())
}

fn default_line_width() -> f64 {
    3.0
}

fn default_eraser_width() -> f64 {
    20.0
}

fn default_show_erase_cursor() -> bool {
    true
}

fn default_erase_cursor_color() -> ColorSpec {
    ColorSpec::Name("gray".to_string())
}

fn default_canvas_width() -> u32 {
    800
}

fn default_canvas_height() -> u32 {
    600
}
