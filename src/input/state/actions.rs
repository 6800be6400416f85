use crate::input::events::{EventDisposition, PointerEvent, PointerPhase};
use crate::input::style::StyleUpdate;
use crate::input::tool::Tool;
use log::{debug, info};

use super::{InputState, SamplingState};

impl InputState {
    /// Returns the currently selected tool.
    pub fn current_tool(&self) -> Tool {
        self.tool
    }

    /// Switches the active tool.
    ///
    /// A running session is committed first so its stroke keeps the tool it
    /// started with. Leaving the erase tool hides the erase cursor.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool == tool {
            return;
        }

        if self.is_sampling() {
            self.commit_session();
        }
        if self.tool == Tool::Erase {
            self.hide_erase_cursor();
        }

        info!("Switched tool from {:?} to {:?}", self.tool, tool);
        self.tool = tool;
        self.needs_redraw = true;
    }

    /// Removes every stroke and forces a repaint of an empty canvas.
    ///
    /// Any live session is terminated before the store is emptied so no
    /// handler is left pointing at a stroke that no longer exists.
    pub fn clear_all(&mut self) {
        self.state = SamplingState::Idle;
        self.path.reset();
        self.touch_contacts.clear();
        self.store.clear();
        self.dirty_tracker.mark_full();
        self.needs_redraw = true;
        info!("Cleared all strokes");
    }

    /// Changes the style used for strokes started from now on.
    ///
    /// Existing strokes, including a live one, keep the style they started with.
    pub fn update_style(&mut self, update: StyleUpdate) {
        if self.style.apply(update) {
            debug!("Style updated: {:?}", self.style);
            if self.tool == Tool::Erase && self.erase_cursor.is_some() {
                // Cursor outline follows the eraser width.
                self.dirty_tracker.mark_full();
                self.needs_redraw = true;
            }
        }
    }

    /// Dispatches a pointer event to the matching handler.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> EventDisposition {
        match event.phase {
            PointerPhase::Down => self.on_pointer_down(event.pointer, event.device, event.position),
            PointerPhase::Move => self.on_pointer_move(event.pointer, event.position),
            PointerPhase::Up => self.on_pointer_up(event.pointer),
            PointerPhase::Leave => self.on_pointer_leave(event.pointer),
            PointerPhase::Cancel => self.on_pointer_cancel(event.pointer),
        }
    }
}
