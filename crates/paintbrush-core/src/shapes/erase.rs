//! Eraser stroke.
//!
//! Erasing paints discs in the background color over whatever was drawn
//! before. It is an ordinary shape in the history, so it can be undone.

use kurbo::{Ellipse, Rect, Shape as _};
use uuid::Uuid;

use super::{ShapeId, ShapeStyle, ShapeTrait};
use crate::color::Rgba8;
use crate::point::Point;
use crate::surface::DrawSurface;

/// Width and height of each eraser disc, in pixels.
pub const ERASER_DIAMETER: i32 = 30;

/// A trace of eraser discs.
#[derive(Debug, Clone, PartialEq)]
pub struct Erase {
    pub(crate) id: ShapeId,
    points: Vec<Point>,
    end: Point,
    style: ShapeStyle,
}

impl Erase {
    /// Start an eraser trace. `color` is the canvas background.
    pub fn new(anchor: Point, color: Rgba8) -> Self {
        Self {
            id: Uuid::new_v4(),
            points: vec![anchor],
            end: anchor,
            style: ShapeStyle::new(color, true),
        }
    }

    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Disc whose bounding square has its top-left corner at `point`.
    fn disc(point: Point) -> Rect {
        let x = f64::from(point.x());
        let y = f64::from(point.y());
        let d = f64::from(ERASER_DIAMETER);
        Rect::new(x, y, x + d, y + d)
    }
}

impl ShapeTrait for Erase {
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

    /// Discs are stamped at every trace point except the most recent one.
    /// Fast drags leave gaps between discs; they are not interpolated.
    fn draw(&self, surface: &mut dyn DrawSurface) {
        let Some((_, stamped)) = self.points.split_last() else {
            return;
        };
        for &point in stamped {
            let path = Ellipse::from_rect(Self::disc(point)).to_path(0.1);
            surface.fill_path(&path, self.style.color);
        }
    }

    fn hit_test(&self, _point: Point) -> bool {
        false
    }
}
