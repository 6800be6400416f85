//! Stroke definitions for drawing and erasing gestures.

use super::color::Color;
use super::path::PathBuilder;
use crate::util::{self, Point, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a stroke deposits ink or masks earlier ink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeKind {
    Draw,
    Erase,
}

/// Handle to a stroke inside a [`StrokeStore`](super::StrokeStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StrokeId(pub(crate) u64);

impl fmt::Display for StrokeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Creation-order key for strokes. Only the ordering is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Timestamp(pub u64);

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={}", self.0)
    }
}

/// Style snapshot taken when a stroke starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Line width for draw strokes, eraser width for erase strokes
    pub width: f64,
    /// Ink color; ignored for erase strokes
    pub color: Color,
}

/// One continuous drawing or erasing gesture.
#[derive(Debug, Clone)]
pub struct Stroke {
    pub(crate) id: StrokeId,
    pub(crate) kind: StrokeKind,
    pub(crate) points: Vec<Point>,
    pub(crate) timestamp: Timestamp,
    pub(crate) committed: bool,
    pub(crate) style: StrokeStyle,
}

impl Stroke {
    pub fn id(&self) -> StrokeId {
        self.id
    }

    pub fn kind(&self) -> StrokeKind {
        self.kind
    }

    /// Sample points in drawing order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// False while the stroke is still being extended by an input session.
    pub fn is_committed(&self) -> bool {
        self.committed
    }

    pub fn width(&self) -> f64 {
        self.style.width
    }

    /// Ink color for draw strokes; `None` for erase strokes.
    pub fn color(&self) -> Option<Color> {
        match self.kind {
            StrokeKind::Draw => Some(self.style.color),
            StrokeKind::Erase => None,
        }
    }

    /// Serialised polyline (`M x y L x y ...`).
    pub fn path_data(&self) -> String {
        PathBuilder::from_points(&self.points).serialize()
    }

    /// Damage rectangle covering the stroke including its width.
    pub fn bounding_box(&self) -> Option<Rect> {
        util::bounding_box_for_points(&self.points, self.style.width)
    }
}
