//! Rectangle shape.

use kurbo::Shape as _;
use uuid::Uuid;

use super::{ShapeId, ShapeStyle, ShapeTrait};
use crate::point::{Frame, Point};
use crate::surface::DrawSurface;

/// An axis-aligned rectangle spanned by the anchor and end point.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub(crate) id: ShapeId,
    anchor: Point,
    end: Point,
    style: ShapeStyle,
}

impl Rectangle {
    /// Create a degenerate rectangle at `anchor`.
    pub fn new(anchor: Point, style: ShapeStyle) -> Self {
        Self {
            id: Uuid::new_v4(),
            anchor,
            end: anchor,
            style,
        }
    }

    /// Normalized frame, independent of drag direction.
    pub fn frame(&self) -> Frame {
        Frame::from_corners(self.anchor, self.end)
    }
}

impl ShapeTrait for Rectangle {
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
        let path = self.frame().to_rect().to_path(0.1);
        if self.style.filled {
            surface.fill_path(&path, self.style.color);
        } else {
            surface.stroke_path(&path, self.style.color);
        }
    }

    fn hit_test(&self, _point: Point) -> bool {
        true
    }
}
