//! Generic pointer event types for cross-host compatibility.
//!
//! Hosts translate their native mouse, pen and touch events into these and
//! convert device coordinates to the canvas's local space before calling in.

use crate::util::Point;
use serde::{Deserialize, Serialize};

/// Identifies one pointer/contact for the lifetime of its press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PointerId(pub u32);

/// Kind of device that produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerDevice {
    /// Mouse or trackpad cursor
    #[default]
    Mouse,
    /// Finger contact; several may be down at once
    Touch,
    /// Stylus
    Pen,
}

/// Phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerPhase {
    /// Contact started (pointerdown / touchstart)
    Down,
    /// Pointer moved, pressed or hovering
    Move,
    /// Contact released (pointerup / touchend)
    Up,
    /// Pointer left the canvas
    Leave,
    /// Host aborted the contact (pointercancel / touchcancel)
    Cancel,
}

/// A single pointer sample in canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub pointer: PointerId,
    pub device: PointerDevice,
    pub phase: PointerPhase,
    pub position: Point,
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, x: f64, y: f64) -> Self {
        Self {
            pointer: PointerId::default(),
            device: PointerDevice::Mouse,
            phase,
            position: Point::new(x, y),
        }
    }

    /// Same event attributed to a specific pointer and device.
    pub fn with_pointer(mut self, pointer: PointerId, device: PointerDevice) -> Self {
        self.pointer = pointer;
        self.device = device;
        self
    }
}

/// Whether the surface handled an event or the host should process it natively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDisposition {
    /// Event was interpreted by the drawing surface
    Consumed,
    /// Event was ignored and should propagate to the host (pan tool)
    Passthrough,
}
