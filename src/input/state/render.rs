use crate::draw::{render_erase_cursor, render_plan, render_polyline};
use crate::input::tool::Tool;

use super::{InputState, SamplingState};

impl InputState {
    /// Paints the full composite: every draw stroke with its erase mask,
    /// then the erase cursor when the erase tool is active.
    pub fn render(&self, ctx: &cairo::Context) {
        let plan = self.render_plan();
        render_plan(ctx, &plan);
        self.render_erase_cursor(ctx);
    }

    /// Paints only the live draw stroke on top of what is already on screen.
    ///
    /// This is the cheap path for pen moves: a live draw stroke is newer than
    /// every eraser, so no mask applies to it and nothing beneath changes.
    ///
    /// # Returns
    /// `true` if a live draw stroke was painted, `false` otherwise
    pub fn render_live_stroke(&self, ctx: &cairo::Context) -> bool {
        let SamplingState::Sampling {
            tool: Tool::Draw, ..
        } = self.state
        else {
            return false;
        };
        let Some(stroke) = self.store.live() else {
            return false;
        };

        render_polyline(
            ctx,
            self.path.points(),
            stroke.color().unwrap_or(self.style.line_color),
            stroke.width(),
        );
        true
    }

    /// Paints the erase cursor outline, if visible.
    pub fn render_erase_cursor(&self, ctx: &cairo::Context) {
        if self.tool != Tool::Erase || !self.show_erase_cursor {
            return;
        }
        if let Some(center) = self.erase_cursor {
            render_erase_cursor(
                ctx,
                center,
                self.style.eraser_width,
                self.erase_cursor_color,
            );
        }
    }
}
