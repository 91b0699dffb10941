//! Trace shape definitions - reference figures for the drawing game.

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// A 2D point in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Chebyshev (box) distance to another point.
    pub fn box_distance(&self, other: Point) -> f32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

/// A figure the child is asked to trace.
///
/// `points` are the authored landmarks of the figure (e.g. the three corners
/// of a triangle). A drawing matches a landmark when it passes within
/// `tolerance` of it on both axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceShape {
    pub name: String,
    pub points: Vec<Point>,
    pub tolerance: f32,
}

impl TraceShape {
    /// Build and validate a trace shape.
    pub fn new(
        name: impl Into<String>,
        points: Vec<Point>,
        tolerance: f32,
    ) -> Result<Self, ContentError> {
        let shape = Self {
            name: name.into(),
            points,
            tolerance,
        };
        shape.validate()?;
        Ok(shape)
    }

    /// Parse and validate an authored TOML shape definition.
    pub fn from_toml(text: &str) -> Result<Self, ContentError> {
        let shape: TraceShape = toml::from_str(text)?;
        shape.validate()?;
        Ok(shape)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.points.is_empty() {
            return Err(ContentError::EmptyShape(self.name.clone()));
        }
        if self.tolerance <= 0.0 {
            return Err(ContentError::BadTolerance {
                shape: self.name.clone(),
                tolerance: self.tolerance,
            });
        }
        Ok(())
    }

    /// Fraction of landmarks covered by a drawing, in `[0, 1]`.
    ///
    /// A landmark counts as covered when any drawn point falls within the
    /// tolerance box around it.
    pub fn similarity(&self, drawing: &[Point]) -> f32 {
        if self.points.is_empty() {
            return 0.0;
        }
        let covered = self
            .points
            .iter()
            .filter(|landmark| {
                drawing
                    .iter()
                    .any(|point| point.box_distance(**landmark) < self.tolerance)
            })
            .count();
        covered as f32 / self.points.len() as f32
    }
}
