//! Pointer input handling and tool state machine.
//!
//! This module translates host pointer/touch events into stroke operations.
//! It maintains the current tool, the style used for new strokes, and the
//! sampling state machine that builds one stroke per pointer session.

pub mod events;
pub mod state;
pub mod style;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{EventDisposition, PointerDevice, PointerEvent, PointerId, PointerPhase};
pub use state::{InputState, SamplingState};
pub use style::{StyleUpdate, ToolStyle};
pub use tool::Tool;
