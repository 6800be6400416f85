//! Sampling state machine and per-surface input state.

use crate::config::Config;
use crate::draw::{
    Color, DirtyTracker, PathBuilder, RenderPlan, StrokeId, StrokeStore, compose,
};
use crate::input::{events::PointerId, style::ToolStyle, tool::Tool};
use crate::util::{Point, Rect};

/// Pointer session state machine.
///
/// A session runs from pointer-down to the matching up/leave/cancel and
/// builds exactly one stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplingState {
    /// No session in progress - waiting for pointer-down
    Idle,
    /// Pointer is down and samples are being appended to the live stroke
    Sampling {
        /// Tool captured when the session started
        tool: Tool,
        /// Pointer that owns the session; other pointers' moves are ignored
        pointer: PointerId,
        /// Live stroke in the store
        stroke: StrokeId,
    },
}

/// Drawing surface state: strokes, tool, style and input session.
///
/// One instance per drawing surface. It owns its [`StrokeStore`], so several
/// surfaces can coexist without sharing anything. All methods run
/// synchronously on the caller's thread; hosts must not feed pointer events
/// back in while a handler is running.
pub struct InputState {
    /// All strokes drawn on this surface
    pub(crate) store: StrokeStore,
    /// Polyline of the live session, used for cheap incremental previews
    pub(crate) path: PathBuilder,
    /// Currently selected tool
    pub(crate) tool: Tool,
    /// Style snapshot source for new strokes
    pub(crate) style: ToolStyle,
    /// Current session state
    pub(crate) state: SamplingState,
    /// Touch contacts currently pressed on the canvas
    pub(crate) touch_contacts: Vec<PointerId>,
    /// Last hover position of the erase cursor (erase tool only)
    pub(crate) erase_cursor: Option<Point>,
    /// Whether the erase cursor outline is drawn at all
    pub show_erase_cursor: bool,
    /// Outline color of the erase cursor
    pub erase_cursor_color: Color,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Canvas width in pixels (set by the host after layout)
    pub screen_width: u32,
    /// Canvas height in pixels (set by the host after layout)
    pub screen_height: u32,
    /// Tracks dirty regions between renders
    pub(crate) dirty_tracker: DirtyTracker,
}

impl InputState {
    /// Creates an empty surface using `style` for new strokes.
    ///
    /// Canvas dimensions default to 0 and should be updated by the host
    /// (see `update_screen_dimensions`).
    pub fn new(style: ToolStyle) -> Self {
        Self {
            store: StrokeStore::new(),
            path: PathBuilder::new(),
            tool: Tool::Draw,
            style,
            state: SamplingState::Idle,
            touch_contacts: Vec::new(),
            erase_cursor: None,
            show_erase_cursor: true,
            erase_cursor_color: crate::draw::GRAY,
            needs_redraw: true,
            screen_width: 0,
            screen_height: 0,
            dirty_tracker: DirtyTracker::new(),
        }
    }

    /// Creates an empty surface from the loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        let mut state = Self::new(ToolStyle {
            line_width: config.drawing.line_width,
            line_color: config.drawing.line_color.to_color(),
            eraser_width: config.drawing.eraser_width,
        });
        state.show_erase_cursor = config.ui.show_erase_cursor;
        state.erase_cursor_color = config.ui.erase_cursor_color.to_color();
        state.update_screen_dimensions(config.canvas.width, config.canvas.height);
        state
    }

    /// Updates canvas dimensions after host layout.
    pub fn update_screen_dimensions(&mut self, width: u32, height: u32) {
        self.screen_width = width;
        self.screen_height = height;
        self.dirty_tracker.mark_full();
        self.needs_redraw = true;
    }

    /// Drains pending dirty rectangles for the current canvas size.
    pub fn take_dirty_regions(&mut self) -> Vec<Rect> {
        let width = self.screen_width.min(i32::MAX as u32) as i32;
        let height = self.screen_height.min(i32::MAX as u32) as i32;
        self.dirty_tracker.take_regions(width, height)
    }

    /// Read access to the stroke store.
    pub fn strokes(&self) -> &StrokeStore {
        &self.store
    }

    /// Style that the next stroke will snapshot.
    pub fn style(&self) -> ToolStyle {
        self.style
    }

    /// Current session state.
    pub fn sampling_state(&self) -> SamplingState {
        self.state
    }

    /// Returns whether a pointer session is in progress.
    pub fn is_sampling(&self) -> bool {
        matches!(self.state, SamplingState::Sampling { .. })
    }

    /// Position of the erase cursor, if it is currently shown.
    pub fn erase_cursor(&self) -> Option<Point> {
        self.erase_cursor
    }

    /// Runs the temporal compositor over the current strokes.
    pub fn render_plan(&self) -> RenderPlan<'_> {
        compose(&self.store)
    }

    /// Serialised polyline of the live session, if one is running.
    pub fn live_path_data(&self) -> Option<String> {
        if self.is_sampling() && self.path.is_begun() {
            Some(self.path.serialize())
        } else {
            None
        }
    }
}
