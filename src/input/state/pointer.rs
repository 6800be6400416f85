use crate::draw::StrokeKind;
use crate::input::events::{EventDisposition, PointerDevice, PointerId, PointerPhase};
use crate::input::tool::Tool;
use crate::util::{self, Point, Rect};
use log::{debug, warn};

use super::{InputState, SamplingState};

impl InputState {
    /// Processes a pointer/touch press.
    ///
    /// # Behavior
    /// - Touch contacts are tracked under every tool, so a finger held down
    ///   through a tool switch still counts
    /// - Pan tool: ignored, the host handles the gesture
    /// - Second simultaneous touch contact: aborts the session without
    ///   committing and hands the gesture to the host
    /// - Idle with Draw/Erase: starts a session and a live stroke at `position`
    /// - Duplicate press during a session: ignored
    pub fn on_pointer_down(
        &mut self,
        pointer: PointerId,
        device: PointerDevice,
        position: Point,
    ) -> EventDisposition {
        if device == PointerDevice::Touch && !self.touch_contacts.contains(&pointer) {
            self.touch_contacts.push(pointer);
        }

        if !self.tool.samples_strokes() {
            return EventDisposition::Passthrough;
        }

        if device == PointerDevice::Touch && self.touch_contacts.len() > 1 {
            debug!(
                "{} touch contacts active; leaving gesture to host",
                self.touch_contacts.len()
            );
            self.abort_session();
            return EventDisposition::Passthrough;
        }

        if self.is_sampling() {
            debug!("Ignoring pointer-down during an active session");
            return EventDisposition::Consumed;
        }

        let kind = match self.tool {
            Tool::Erase => {
                // Drop a stale temporary eraser left by an unfinished session.
                self.store.remove_uncommitted_of_kind(StrokeKind::Erase);
                StrokeKind::Erase
            }
            _ => StrokeKind::Draw,
        };

        match self
            .store
            .start_stroke(kind, position, self.style.snapshot(kind))
        {
            Ok(stroke) => {
                self.path.begin(position);
                self.state = SamplingState::Sampling {
                    tool: self.tool,
                    pointer,
                    stroke,
                };
                self.mark_session_damage(kind, None, position);
            }
            Err(err) => {
                warn!("Cannot start stroke: {err}");
            }
        }

        if self.tool == Tool::Erase {
            self.move_erase_cursor(position);
        }
        EventDisposition::Consumed
    }

    /// Processes pointer motion, pressed or hovering.
    ///
    /// # Behavior
    /// - Touch contact that does not own the session: passed to the host
    /// - Erase tool: moves the erase cursor
    /// - During a session owned by `pointer`: appends `position` to the live stroke
    /// - Anything else: ignored
    pub fn on_pointer_move(&mut self, pointer: PointerId, position: Point) -> EventDisposition {
        if !self.tool.samples_strokes() || self.is_host_gesture_contact(pointer) {
            return EventDisposition::Passthrough;
        }

        if self.tool == Tool::Erase {
            self.move_erase_cursor(position);
        }

        let SamplingState::Sampling {
            tool,
            pointer: owner,
            ..
        } = self.state
        else {
            return EventDisposition::Consumed;
        };
        if owner != pointer {
            return EventDisposition::Consumed;
        }

        let previous = self.path.points().last().copied();
        if let Err(err) = self.path.extend(position) {
            warn!("Live path out of sync with session: {err}");
            self.path.begin(position);
        }
        self.store.extend_live_stroke(position);

        let kind = match tool {
            Tool::Erase => StrokeKind::Erase,
            _ => StrokeKind::Draw,
        };
        self.mark_session_damage(kind, previous, position);
        EventDisposition::Consumed
    }

    /// Processes a pointer release. Commits the session owned by `pointer`.
    pub fn on_pointer_up(&mut self, pointer: PointerId) -> EventDisposition {
        self.end_session(pointer, PointerPhase::Up)
    }

    /// Processes the pointer leaving the canvas. Commits like a release.
    pub fn on_pointer_leave(&mut self, pointer: PointerId) -> EventDisposition {
        if self.tool.samples_strokes() {
            self.hide_erase_cursor();
        }
        self.end_session(pointer, PointerPhase::Leave)
    }

    /// Processes a host cancellation. Captured geometry is kept and committed.
    pub fn on_pointer_cancel(&mut self, pointer: PointerId) -> EventDisposition {
        self.end_session(pointer, PointerPhase::Cancel)
    }

    /// Ends the session owned by `pointer`, committing whatever was captured.
    ///
    /// Repeated end signals for the same gesture are no-ops.
    fn end_session(&mut self, pointer: PointerId, phase: PointerPhase) -> EventDisposition {
        let host_gesture = self.is_host_gesture_contact(pointer);
        self.touch_contacts.retain(|contact| *contact != pointer);

        if !self.tool.samples_strokes() || host_gesture {
            return EventDisposition::Passthrough;
        }

        match self.state {
            SamplingState::Sampling { pointer: owner, .. } if owner == pointer => {
                self.commit_session();
                debug!("Session ended by {phase:?}");
            }
            _ => {}
        }
        EventDisposition::Consumed
    }

    /// True for a touch contact that is down but does not own the session,
    /// i.e. part of a gesture the host is handling.
    fn is_host_gesture_contact(&self, pointer: PointerId) -> bool {
        if !self.touch_contacts.contains(&pointer) {
            return false;
        }
        !matches!(
            self.state,
            SamplingState::Sampling { pointer: owner, .. } if owner == pointer
        )
    }

    /// Commits the live stroke and returns to Idle.
    pub(super) fn commit_session(&mut self) {
        self.store.commit_live_stroke();
        self.path.reset();
        self.state = SamplingState::Idle;
        self.dirty_tracker.mark_full();
        self.needs_redraw = true;
    }

    /// Discards the live stroke and returns to Idle without committing.
    pub(super) fn abort_session(&mut self) {
        if !self.is_sampling() {
            return;
        }
        self.store.discard_live();
        self.path.reset();
        self.state = SamplingState::Idle;
        self.dirty_tracker.mark_full();
        self.needs_redraw = true;
    }

    /// Records damage for a new sample.
    ///
    /// Erasing can uncover any earlier ink so it forces a full recompute; a
    /// live draw stroke is the topmost stroke, so only its new segment changes.
    fn mark_session_damage(&mut self, kind: StrokeKind, previous: Option<Point>, position: Point) {
        match kind {
            StrokeKind::Erase => self.dirty_tracker.mark_full(),
            StrokeKind::Draw => {
                // The live stroke keeps the width it started with.
                let width = self
                    .store
                    .live()
                    .map_or(self.style.line_width, |stroke| stroke.width());
                let segment: Vec<Point> = previous.into_iter().chain([position]).collect();
                self.dirty_tracker
                    .mark_optional_rect(util::bounding_box_for_points(&segment, width));
            }
        }
        self.needs_redraw = true;
    }

    fn move_erase_cursor(&mut self, position: Point) {
        if !self.show_erase_cursor {
            return;
        }
        let previous = self.erase_cursor.replace(position);
        let old = previous.and_then(|p| self.erase_cursor_bounds(p));
        let new = self.erase_cursor_bounds(position);
        if let Some(rect) = old {
            self.dirty_tracker.mark_rect(rect);
        }
        self.dirty_tracker.mark_optional_rect(new);
        self.needs_redraw = true;
    }

    pub(super) fn hide_erase_cursor(&mut self) {
        if let Some(previous) = self.erase_cursor.take() {
            let bounds = self.erase_cursor_bounds(previous);
            self.dirty_tracker.mark_optional_rect(bounds);
            self.needs_redraw = true;
        }
    }

    fn erase_cursor_bounds(&self, center: Point) -> Option<Rect> {
        // Outline is 1px wide, drawn on the eraser radius.
        util::bounding_box_for_points(&[center], self.style.eraser_width + 2.0)
    }
}
