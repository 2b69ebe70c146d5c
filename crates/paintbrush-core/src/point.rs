//! Integer canvas coordinates.

/// A position on the canvas in device pixels.
///
/// The origin is the top-left corner of the drawing area; `x` grows to the
/// right and `y` grows downward. Points are plain values and never change
/// once constructed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    /// The canvas origin.
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn x(self) -> i32 {
        self.x
    }

    pub const fn y(self) -> i32 {
        self.y
    }

    /// Convert to a floating point position for path construction.
    pub fn to_kurbo(self) -> kurbo::Point {
        kurbo::Point::new(f64::from(self.x), f64::from(self.y))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for kurbo::Point {
    fn from(point: Point) -> Self {
        point.to_kurbo()
    }
}

/// Axis-aligned frame spanned by two corners, normalized so that the size is
/// never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Frame {
    /// Build the frame covering both corners, whichever way the drag went.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: a.x.abs_diff(b.x),
            height: a.y.abs_diff(b.y),
        }
    }

    pub fn to_rect(&self) -> kurbo::Rect {
        let x0 = f64::from(self.x);
        let y0 = f64::from(self.y);
        kurbo::Rect::new(
            x0,
            y0,
            x0 + f64::from(self.width),
            y0 + f64::from(self.height),
        )
    }
}
