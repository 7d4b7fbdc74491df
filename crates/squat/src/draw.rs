//! Toolkit independent drawing commands.
use nalgebra::Point2;
use serde::Serialize;
use strum::Display;

use crate::annotation::AngleArc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    Gray,
    Red,
    Blue,
}

/// A single drawing command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Shape {
    Line {
        from: Point2<f64>,
        to: Point2<f64>,
        width: f64,
        color: Color,
        /// Dash and gap length, solid when `None`.
        dash: Option<[f64; 2]>,
    },
    Circle {
        center: Point2<f64>,
        radius: f64,
        fill: Color,
        outline: Color,
    },
    Arc {
        arc: AngleArc,
        color: Color,
    },
    Text {
        position: Point2<f64>,
        text: String,
        color: Color,
    },
}

/// Shapes in the order they should be drawn, later shapes on top.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DrawList {
    shapes: Vec<Shape>,
}

impl DrawList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn line(&mut self, from: Point2<f64>, to: Point2<f64>, width: f64, color: Color) {
        self.push(Shape::Line {
            from,
            to,
            width,
            color,
            dash: None,
        });
    }

    pub fn dashed_line(
        &mut self,
        from: Point2<f64>,
        to: Point2<f64>,
        dash: [f64; 2],
        color: Color,
    ) {
        self.push(Shape::Line {
            from,
            to,
            width: 1.0,
            color,
            dash: Some(dash),
        });
    }

    /// A filled circle with a matching outline.
    pub fn dot(&mut self, center: Point2<f64>, radius: f64, color: Color) {
        self.push(Shape::Circle {
            center,
            radius,
            fill: color,
            outline: color,
        });
    }

    pub fn arc(&mut self, arc: AngleArc, color: Color) {
        self.push(Shape::Arc { arc, color });
    }

    pub fn text(&mut self, position: Point2<f64>, text: impl Into<String>, color: Color) {
        self.push(Shape::Text {
            position,
            text: text.into(),
            color,
        });
    }

    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl<'a> IntoIterator for &'a DrawList {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}
