//! Geometry helpers shared by the stroke model, compositor and renderer.
//!
//! This module provides:
//! - [`Point`]: canvas-local sample coordinates
//! - [`Rect`]: integer rectangles used for dirty region tracking
//! - Stroke bounding box calculations

use serde::{Deserialize, Serialize};

// ============================================================================
// Points
// ============================================================================

/// A 2-D sample in the canvas's local coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

// ============================================================================
// Rectangles
// ============================================================================

/// Axis-aligned rectangle helper used for dirty region tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from min/max bounds (inclusive min, exclusive max).
    pub fn from_min_max(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Self> {
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Returns true if rectangle has a positive area.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Bounding box of a polyline expanded by half the stroke width on each side.
///
/// Returns `None` for an empty point list.
pub fn bounding_box_for_points(points: &[Point], width: f64) -> Option<Rect> {
    let first = points.first()?;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);

    for point in &points[1..] {
        min_x = min_x.min(point.x);
        max_x = max_x.max(point.x);
        min_y = min_y.min(point.y);
        max_y = max_y.max(point.y);
    }

    let padding = (width / 2.0).max(1.0);
    let min_x = (min_x - padding).floor() as i32;
    let min_y = (min_y - padding).floor() as i32;
    let max_x = (max_x + padding).ceil() as i32;
    let max_y = (max_y + padding).ceil() as i32;

    Rect::from_min_max(min_x, min_y, max_x.max(min_x + 1), max_y.max(min_y + 1))
}
