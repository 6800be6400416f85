//! Stroke model, temporal compositor and Cairo presentation.
//!
//! This module defines the core drawing types:
//! - [`PathBuilder`]: accumulates samples of the stroke being drawn
//! - [`Stroke`] and [`StrokeStore`]: the committed strokes plus at most one live stroke
//! - [`compose`]: turns the store into a [`RenderPlan`] honouring erase order
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod composite;
pub mod dirty;
pub mod error;
pub mod path;
pub mod render;
pub mod store;
pub mod stroke;

// Re-export commonly used types at module level
pub use color::Color;
pub use composite::{ClipMask, PlanEntry, RenderPlan, compose};
pub use dirty::DirtyTracker;
pub use error::StrokeError;
pub use path::{PathBuilder, PathCommand};
pub use render::{fill_background, render_erase_cursor, render_plan, render_polyline};
pub use store::StrokeStore;
pub use stroke::{Stroke, StrokeId, StrokeKind, StrokeStyle, Timestamp};

#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GRAY, GREEN, ORANGE, PINK, RED, TRANSPARENT, WHITE, YELLOW};
