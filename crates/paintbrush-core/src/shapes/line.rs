//! Line shape.

use uuid::Uuid;

use super::{ShapeId, ShapeStyle, ShapeTrait, segment};
use crate::color::Rgba8;
use crate::point::Point;
use crate::surface::DrawSurface;

/// A straight segment from the anchor to the end point.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub(crate) id: ShapeId,
    anchor: Point,
    end: Point,
    style: ShapeStyle,
}

impl Line {
    /// Create a zero-length line at `anchor`.
    pub fn new(anchor: Point, color: Rgba8) -> Self {
        Self {
            id: Uuid::new_v4(),
            anchor,
            end: anchor,
            style: ShapeStyle::outline(color),
        }
    }
}

impl ShapeTrait for Line {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn anchor(&self) -> Point {
        self.anchor
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
        surface.stroke_path(&segment(self.anchor, self.end), self.style.color);
    }

    fn hit_test(&self, _point: Point) -> bool {
        true
    }
}
