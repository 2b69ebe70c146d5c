//! Oval shape.

use kurbo::{Ellipse, Shape as _};
use uuid::Uuid;

use super::{ShapeId, ShapeStyle, ShapeTrait};
use crate::point::{Frame, Point};
use crate::surface::DrawSurface;

/// An ellipse inscribed in the frame spanned by the anchor and end point.
#[derive(Debug, Clone, PartialEq)]
pub struct Oval {
    pub(crate) id: ShapeId,
    anchor: Point,
    end: Point,
    style: ShapeStyle,
}

impl Oval {
    pub fn new(anchor: Point, style: ShapeStyle) -> Self {
        Self {
            id: Uuid::new_v4(),
            anchor,
            end: anchor,
            style,
        }
    }

    pub fn frame(&self) -> Frame {
        Frame::from_corners(self.anchor, self.end)
    }
}

impl ShapeTrait for Oval {
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
        let path = Ellipse::from_rect(self.frame().to_rect()).to_path(0.1);
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
