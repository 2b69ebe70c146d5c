//! Shape definitions for the paint canvas.

mod erase;
mod freehand;
mod line;
mod oval;
mod rectangle;

pub use erase::{ERASER_DIAMETER, Erase};
pub use freehand::Freehand;
pub use line::Line;
pub use oval::Oval;
pub use rectangle::Rectangle;

use kurbo::BezPath;
use uuid::Uuid;

use crate::color::Rgba8;
use crate::point::Point;
use crate::surface::DrawSurface;
use crate::tools::ToolKind;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Color and fill flag captured when a shape is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeStyle {
    pub color: Rgba8,
    /// Whether closed shapes paint their interior. Ignored by open shapes.
    pub filled: bool,
}

impl ShapeStyle {
    pub const fn new(color: Rgba8, filled: bool) -> Self {
        Self { color, filled }
    }

    pub const fn outline(color: Rgba8) -> Self {
        Self::new(color, false)
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self::outline(Rgba8::RED)
    }
}

/// Common behavior for all shapes.
pub trait ShapeTrait {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Point where the gesture began.
    fn anchor(&self) -> Point;

    /// Most recent pointer position of the gesture.
    fn end(&self) -> Point;

    /// Move the end point.
    fn set_end(&mut self, end: Point);

    /// Get the style.
    fn style(&self) -> &ShapeStyle;

    /// Paint this shape onto a surface.
    fn draw(&self, surface: &mut dyn DrawSurface);

    /// Check if a canvas point hits this shape.
    ///
    /// Nothing selects shapes yet, so implementations answer with a fixed
    /// value per variant.
    fn hit_test(&self, point: Point) -> bool;
}

/// Enum wrapper for all shape types.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line(Line),
    Rectangle(Rectangle),
    Oval(Oval),
    Freehand(Freehand),
    Erase(Erase),
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        self.as_trait().id()
    }

    pub fn anchor(&self) -> Point {
        self.as_trait().anchor()
    }

    pub fn end(&self) -> Point {
        self.as_trait().end()
    }

    pub fn set_end(&mut self, end: Point) {
        self.as_trait_mut().set_end(end);
    }

    pub fn style(&self) -> &ShapeStyle {
        self.as_trait().style()
    }

    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        self.as_trait().draw(surface);
    }

    pub fn hit_test(&self, point: Point) -> bool {
        self.as_trait().hit_test(point)
    }

    /// Append a point to the trace of freehand and eraser strokes.
    /// Returns false for shapes without a trace.
    pub fn extend_trace(&mut self, point: Point) -> bool {
        match self {
            Shape::Freehand(s) => {
                s.add_point(point);
                true
            }
            Shape::Erase(s) => {
                s.add_point(point);
                true
            }
            Shape::Line(_) | Shape::Rectangle(_) | Shape::Oval(_) => false,
        }
    }

    /// Recorded trace for freehand and eraser strokes.
    pub fn trace(&self) -> Option<&[Point]> {
        match self {
            Shape::Freehand(s) => Some(s.points()),
            Shape::Erase(s) => Some(s.points()),
            Shape::Line(_) | Shape::Rectangle(_) | Shape::Oval(_) => None,
        }
    }

    /// The tool that produces this kind of shape.
    pub fn kind(&self) -> ToolKind {
        match self {
            Shape::Line(_) => ToolKind::Line,
            Shape::Rectangle(_) => ToolKind::Rectangle,
            Shape::Oval(_) => ToolKind::Oval,
            Shape::Freehand(_) => ToolKind::Freehand,
            Shape::Erase(_) => ToolKind::Erase,
        }
    }

    fn as_trait(&self) -> &dyn ShapeTrait {
        match self {
            Shape::Line(s) => s,
            Shape::Rectangle(s) => s,
            Shape::Oval(s) => s,
            Shape::Freehand(s) => s,
            Shape::Erase(s) => s,
        }
    }

    fn as_trait_mut(&mut self) -> &mut dyn ShapeTrait {
        match self {
            Shape::Line(s) => s,
            Shape::Rectangle(s) => s,
            Shape::Oval(s) => s,
            Shape::Freehand(s) => s,
            Shape::Erase(s) => s,
        }
    }
}

/// Two-point path from `a` to `b`.
pub(crate) fn segment(a: Point, b: Point) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(a.to_kurbo());
    path.line_to(b.to_kurbo());
    path
}
