//! Tool selection.

use serde::{Deserialize, Serialize};

/// Tool selection.
///
/// The active tool decides what a pointer session does on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Freehand ink following the pointer (default)
    #[default]
    Draw,
    /// Masks ink drawn before the eraser stroke started
    Erase,
    /// Hand/passthrough - pointer events are left to the host (pan, pinch-zoom)
    Pan,
}

impl Tool {
    /// Returns true if pointer sessions with this tool produce strokes.
    pub fn samples_strokes(self) -> bool {
        !matches!(self, Tool::Pan)
    }
}
