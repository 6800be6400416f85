//! Polyline accumulation for the stroke being drawn.

use super::error::StrokeError;
use crate::util::Point;
use std::fmt::Write as _;

/// A single renderer-agnostic path command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
}

/// Accumulates pointer samples into one open polyline.
///
/// A builder is anchored with [`PathBuilder::begin`] and then grows one
/// segment per [`PathBuilder::extend`]. It can be serialised at any time
/// after `begin` into SVG-compatible path data (`M x y L x y ...`).
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    points: Vec<Point>,
}

impl PathBuilder {
    /// Creates an empty builder; call [`begin`](Self::begin) before extending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a path from an existing point sequence (first point is the anchor).
    pub fn from_points(points: &[Point]) -> Self {
        Self {
            points: points.to_vec(),
        }
    }

    /// Resets the builder to a single-point path anchored at `point`.
    pub fn begin(&mut self, point: Point) {
        self.points.clear();
        self.points.push(point);
    }

    /// Appends a line segment from the last point to `point`.
    pub fn extend(&mut self, point: Point) -> Result<(), StrokeError> {
        if self.points.is_empty() {
            return Err(StrokeError::PathNotBegun);
        }
        self.points.push(point);
        Ok(())
    }

    /// Drops all accumulated points.
    pub fn reset(&mut self) {
        self.points.clear();
    }

    pub fn is_begun(&self) -> bool {
        !self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterates the polyline as move-to followed by line-to commands.
    pub fn commands(&self) -> impl Iterator<Item = PathCommand> + '_ {
        self.points.iter().enumerate().map(|(idx, point)| {
            if idx == 0 {
                PathCommand::MoveTo(*point)
            } else {
                PathCommand::LineTo(*point)
            }
        })
    }

    /// Returns the polyline as path data. Empty until `begin` is called.
    pub fn serialize(&self) -> String {
        let mut data = String::with_capacity(self.points.len() * 12);
        for command in self.commands() {
            if !data.is_empty() {
                data.push(' ');
            }
            // Writing into a String cannot fail.
            let _ = match command {
                PathCommand::MoveTo(p) => write!(data, "M{} {}", p.x, p.y),
                PathCommand::LineTo(p) => write!(data, "L{} {}", p.x, p.y),
            };
        }
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_emits_move_then_lines_in_order() {
        let mut path = PathBuilder::new();
        path.begin(Point::new(10.0, 10.0));
        path.extend(Point::new(20.0, 10.0)).unwrap();
        path.extend(Point::new(20.5, 20.0)).unwrap();

        assert_eq!(path.serialize(), "M10 10 L20 10 L20.5 20");
        // Serialising does not consume or alter state.
        assert_eq!(path.serialize(), "M10 10 L20 10 L20.5 20");
    }

    #[test]
    fn begin_resets_previous_points() {
        let mut path = PathBuilder::new();
        path.begin(Point::new(1.0, 1.0));
        path.extend(Point::new(2.0, 2.0)).unwrap();
        path.begin(Point::new(5.0, 6.0));

        assert_eq!(path.points(), &[Point::new(5.0, 6.0)]);
        assert_eq!(path.serialize(), "M5 6");
    }

    #[test]
    fn extend_without_begin_is_rejected() {
        let mut path = PathBuilder::new();
        assert_eq!(
            path.extend(Point::new(1.0, 1.0)),
            Err(StrokeError::PathNotBegun)
        );
        assert!(!path.is_begun());
        assert_eq!(path.serialize(), "");
    }

    #[test]
    fn commands_start_with_move_to() {
        let path = PathBuilder::from_points(&[Point::new(0.0, 0.0), Point::new(3.0, 4.0)]);
        let commands: Vec<_> = path.commands().collect();
        assert_eq!(
            commands,
            vec![
                PathCommand::MoveTo(Point::new(0.0, 0.0)),
                PathCommand::LineTo(Point::new(3.0, 4.0)),
            ]
        );
    }
}
