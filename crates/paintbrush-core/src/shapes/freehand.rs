//! Freehand drawing shape.

use uuid::Uuid;

use super::{ShapeId, ShapeStyle, ShapeTrait, segment};
use crate::color::Rgba8;
use crate::point::Point;
use crate::surface::DrawSurface;

/// A freehand stroke through every recorded pointer position.
#[derive(Debug, Clone, PartialEq)]
pub struct Freehand {
    pub(crate) id: ShapeId,
    points: Vec<Point>,
    end: Point,
    style: ShapeStyle,
}

impl Freehand {
    /// Start a stroke whose trace holds only `anchor`.
    pub fn new(anchor: Point, color: Rgba8) -> Self {
        Self {
            id: Uuid::new_v4(),
            points: vec![anchor],
            end: anchor,
            style: ShapeStyle::outline(color),
        }
    }

    /// Add a point to the trace.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Recorded trace, starting with the anchor.
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl ShapeTrait for Freehand {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn anchor(&self) -> Point {
        self.points[0]
    }

    fn end(&self) -> Point {
        self.end
    }

    fn set_end(&mut self, end: Point) {
        self.end = end;
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn draw(&self, surface: &mut dyn DrawSurface) {
        for pair in self.points.windows(2) {
            surface.stroke_path(&segment(pair[0], pair[1]), self.style.color);
        }
    }

    fn hit_test(&self, _point: Point) -> bool {
        false
    }
}
