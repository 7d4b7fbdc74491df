use nalgebra::{Point2, Vector2};
use serde::Serialize;

/// Arc drawn around a joint to indicate an angle.
///
/// Angles are in degrees, in the mathematical convention: 0 points along the positive x-axis and
/// angles grow counter-clockwise on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AngleArc {
    pub center: Point2<f64>,
    pub radius: f64,
    pub start: f64,
    pub extent: f64,
}

impl AngleArc {
    /// Arc around `vertex` from `start` to `end`.
    #[must_use]
    pub fn new(vertex: Point2<f64>, start: f64, end: f64, radius: f64) -> Self {
        Self {
            center: vertex,
            radius,
            start,
            extent: end - start,
        }
    }

    #[must_use]
    pub fn end(&self) -> f64 {
        self.start + self.extent
    }

    /// Screen position of the start and end of the arc.
    #[must_use]
    pub fn endpoints(&self) -> (Point2<f64>, Point2<f64>) {
        (self.point_at(self.start), self.point_at(self.end()))
    }

    /// Bounding box of the full circle, as `(top_left, bottom_right)`.
    #[must_use]
    pub fn bounds(&self) -> (Point2<f64>, Point2<f64>) {
        let half = Vector2::repeat(self.radius);
        (self.center - half, self.center + half)
    }

    // y is flipped, screen y grows down
    fn point_at(&self, angle: f64) -> Point2<f64> {
        let angle = angle.to_radians();
        self.center + self.radius * Vector2::new(angle.cos(), -angle.sin())
    }
}
