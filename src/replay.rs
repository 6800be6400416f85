//! Scripted pointer sessions.
//!
//! A replay script is a TOML file of `[[step]]` tables that are fed through
//! an [`InputState`] in order, exactly as a host would deliver them:
//!
//! ```toml
//! [[step]]
//! action = "down"
//! x = 10
//! y = 10
//!
//! [[step]]
//! action = "move"
//! x = 20
//! y = 10
//!
//! [[step]]
//! action = "up"
//!
//! [[step]]
//! action = "tool"
//! tool = "erase"
//! ```

use crate::config::ColorSpec;
use crate::input::{
    EventDisposition, InputState, PointerDevice, PointerId, StyleUpdate, Tool,
};
use crate::util::Point;
use anyhow::{Context, Result};
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One scripted host action.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum ReplayStep {
    /// Select a tool
    Tool { tool: Tool },
    /// Change the style for future strokes
    Style {
        line_width: Option<f64>,
        line_color: Option<ColorSpec>,
        eraser_width: Option<f64>,
    },
    /// Pointer/touch press
    Down {
        x: f64,
        y: f64,
        #[serde(default)]
        pointer: u32,
        #[serde(default)]
        device: PointerDevice,
    },
    /// Pointer motion
    Move {
        x: f64,
        y: f64,
        #[serde(default)]
        pointer: u32,
    },
    /// Pointer release
    Up {
        #[serde(default)]
        pointer: u32,
    },
    /// Pointer left the canvas
    Leave {
        #[serde(default)]
        pointer: u32,
    },
    /// Host cancelled the contact
    Cancel {
        #[serde(default)]
        pointer: u32,
    },
    /// Remove every stroke
    Clear,
}

/// Ordered list of steps loaded from a script.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReplayScript {
    #[serde(default, rename = "step")]
    pub steps: Vec<ReplayStep>,
}

/// Counts of how the surface disposed of replayed pointer events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub steps: usize,
    pub consumed: usize,
    pub passthrough: usize,
}

impl ReplayScript {
    /// Parses a script from TOML source.
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Loads a script file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid script.
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read replay script {}", path.display()))?;
        let script = Self::from_toml(&source)
            .with_context(|| format!("Failed to parse replay script {}", path.display()))?;
        info!(
            "Loaded {} replay step(s) from {}",
            script.steps.len(),
            path.display()
        );
        Ok(script)
    }

    /// Feeds every step into `state` in order.
    pub fn apply(&self, state: &mut InputState) -> ReplaySummary {
        let mut summary = ReplaySummary::default();

        for step in &self.steps {
            summary.steps += 1;
            debug!("Replaying {step:?}");

            let disposition = match *step {
                ReplayStep::Tool { tool } => {
                    state.set_tool(tool);
                    None
                }
                ReplayStep::Style {
                    line_width,
                    ref line_color,
                    eraser_width,
                } => {
                    state.update_style(StyleUpdate {
                        line_width,
                        line_color: line_color.as_ref().map(ColorSpec::to_color),
                        eraser_width,
                    });
                    None
                }
                ReplayStep::Down {
                    x,
                    y,
                    pointer,
                    device,
                } => Some(state.on_pointer_down(PointerId(pointer), device, Point::new(x, y))),
                ReplayStep::Move { x, y, pointer } => {
                    Some(state.on_pointer_move(PointerId(pointer), Point::new(x, y)))
                }
                ReplayStep::Up { pointer } => Some(state.on_pointer_up(PointerId(pointer))),
                ReplayStep::Leave { pointer } => Some(state.on_pointer_leave(PointerId(pointer))),
                ReplayStep::Cancel { pointer } => {
                    Some(state.on_pointer_cancel(PointerId(pointer)))
                }
                ReplayStep::Clear => {
                    state.clear_all();
                    None
                }
            };

            match disposition {
                Some(EventDisposition::Consumed) => summary.consumed += 1,
                Some(EventDisposition::Passthrough) => summary.passthrough += 1,
                None => {}
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLUE, RED, StrokeKind};
    use crate::input::ToolStyle;

    const SCRIPT: &str = r#"
        [[step]]
        action = "down"
        x = 10
        y = 10

        [[step]]
        action = "move"
        x = 20
        y = 10

        [[step]]
        action = "move"
        x = 20.0
        y = 20.5

        [[step]]
        action = "up"

        [[step]]
        action = "tool"
        tool = "erase"

        [[step]]
        action = "style"
        eraser_width = 10

        [[step]]
        action = "down"
        x = 15
        y = 10

        [[step]]
        action = "up"
    "#;

    fn surface() -> InputState {
        InputState::new(ToolStyle {
            line_width: 4.0,
            line_color: RED,
            eraser_width: 30.0,
        })
    }

    #[test]
    fn parses_every_step_kind() {
        let script = ReplayScript::from_toml(SCRIPT).unwrap();
        assert_eq!(script.steps.len(), 8);
        assert_eq!(
            script.steps[0],
            ReplayStep::Down {
                x: 10.0,
                y: 10.0,
                pointer: 0,
                device: PointerDevice::Mouse,
            }
        );
        assert_eq!(script.steps[4], ReplayStep::Tool { tool: Tool::Erase });
        assert_eq!(script.steps[7], ReplayStep::Up { pointer: 0 });
    }

    #[test]
    fn apply_builds_strokes_and_mask() {
        let script = ReplayScript::from_toml(SCRIPT).unwrap();
        let mut state = surface();
        let summary = script.apply(&mut state);

        assert_eq!(summary.steps, 8);
        assert_eq!(summary.consumed, 6);
        assert_eq!(summary.passthrough, 0);

        let strokes: Vec<_> = state.strokes().all().collect();
        assert_eq!(strokes.len(), 2);
        assert_eq!(strokes[0].kind(), StrokeKind::Draw);
        assert_eq!(strokes[1].kind(), StrokeKind::Erase);
        assert_eq!(strokes[1].width(), 10.0);
        assert!(state.render_plan().entries()[0].is_clipped());
    }

    #[test]
    fn pan_steps_count_as_passthrough() {
        let script = ReplayScript::from_toml(
            r#"
            [[step]]
            action = "tool"
            tool = "pan"

            [[step]]
            action = "down"
            x = 1
            y = 1
            device = "touch"
            pointer = 4

            [[step]]
            action = "up"
            pointer = 4
            "#,
        )
        .unwrap();
        let mut state = surface();
        let summary = script.apply(&mut state);
        assert_eq!(summary.passthrough, 2);
        assert!(state.strokes().is_empty());
    }

    #[test]
    fn style_step_resolves_colors() {
        let script = ReplayScript::from_toml(
            r#"
            [[step]]
            action = "style"
            line_color = "blue"
            "#,
        )
        .unwrap();
        let mut state = surface();
        script.apply(&mut state);
        assert_eq!(state.style().line_color, BLUE);
    }

    #[test]
    fn unknown_action_is_rejected() {
        let err = ReplayScript::from_toml("[[step]]\naction = \"jump\"\n").unwrap_err();
        assert!(err.to_string().contains("jump"));
    }

    #[test]
    fn empty_script_is_valid() {
        let script = ReplayScript::from_toml("").unwrap();
        assert!(script.steps.is_empty());
    }
}
