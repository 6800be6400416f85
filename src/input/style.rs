//! Style applied to strokes started from now on.

use crate::draw::{Color, StrokeKind, StrokeStyle};
use log::warn;

/// Current style configuration for new strokes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolStyle {
    /// Pen line width in canvas units
    pub line_width: f64,
    /// Pen ink color
    pub line_color: Color,
    /// Eraser stroke width in canvas units
    pub eraser_width: f64,
}

impl ToolStyle {
    /// Snapshot used for a stroke of `kind` started now.
    pub fn snapshot(&self, kind: StrokeKind) -> StrokeStyle {
        match kind {
            StrokeKind::Draw => StrokeStyle {
                width: self.line_width,
                color: self.line_color,
            },
            StrokeKind::Erase => StrokeStyle {
                width: self.eraser_width,
                color: self.line_color,
            },
        }
    }

    /// Applies the fields present in `update`. Returns true if anything changed.
    ///
    /// Widths that are not finite and positive are ignored with a warning.
    pub fn apply(&mut self, update: StyleUpdate) -> bool {
        let before = *self;

        if let Some(width) = update.line_width {
            if valid_width(width) {
                self.line_width = width;
            } else {
                warn!("Ignoring invalid line width {width}");
            }
        }
        if let Some(color) = update.line_color {
            self.line_color = color;
        }
        if let Some(width) = update.eraser_width {
            if valid_width(width) {
                self.eraser_width = width;
            } else {
                warn!("Ignoring invalid eraser width {width}");
            }
        }

        *self != before
    }
}

/// Partial style change; `None` fields keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StyleUpdate {
    pub line_width: Option<f64>,
    pub line_color: Option<Color>,
    pub eraser_width: Option<f64>,
}

fn valid_width(width: f64) -> bool {
    width.is_finite() && width > 0.0
}
