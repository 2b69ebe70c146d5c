//! Tool selection and the gesture state machine that builds shapes.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::color::Rgba8;
use crate::point::Point;
use crate::shapes::{Erase, Freehand, Line, Oval, Rectangle, Shape, ShapeStyle};

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToolKind {
    #[default]
    Rectangle,
    Oval,
    Line,
    Freehand,
    Erase,
}

impl ToolKind {
    /// All tools in panel order.
    pub const ALL: [ToolKind; 5] = [
        ToolKind::Rectangle,
        ToolKind::Oval,
        ToolKind::Line,
        ToolKind::Freehand,
        ToolKind::Erase,
    ];

    /// Lowercase name used in configuration and logs.
    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Rectangle => "rectangle",
            ToolKind::Oval => "oval",
            ToolKind::Line => "line",
            ToolKind::Freehand => "freehand",
            ToolKind::Erase => "erase",
        }
    }

    /// Label shown on the panel button.
    pub fn label(self) -> &'static str {
        match self {
            ToolKind::Rectangle => "Rectangle",
            ToolKind::Oval => "Oval",
            ToolKind::Line => "Line",
            ToolKind::Freehand => "Freehand",
            ToolKind::Erase => "Erase",
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned for a tool name that matches no [`ToolKind`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tool {0:?}")]
pub struct ParseToolError(pub String);

impl FromStr for ToolKind {
    type Err = ParseToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        ToolKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseToolError(s.to_string()))
    }
}

/// Panel selections read at the start of each gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolSettings {
    /// Selected tool, or `None` when the selection matched no known tool.
    pub tool: Option<ToolKind>,
    pub color: Rgba8,
    pub filled: bool,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            tool: Some(ToolKind::default()),
            color: Rgba8::RED,
            filled: false,
        }
    }
}

/// State of the gesture being built.
#[derive(Debug, Clone, Default)]
enum BuilderState {
    /// Waiting for a pointer press.
    #[default]
    Idle,
    /// A press started a shape that follows the pointer until release.
    Active { shape: Shape },
}

/// Turns a press, drag and release into one finished [`Shape`].
#[derive(Debug, Clone)]
pub struct ShapeBuilder {
    state: BuilderState,
    /// Color painted by the eraser.
    eraser_color: Rgba8,
}

impl Default for ShapeBuilder {
    fn default() -> Self {
        Self::new(Rgba8::WHITE)
    }
}

impl ShapeBuilder {
    pub fn new(eraser_color: Rgba8) -> Self {
        Self {
            state: BuilderState::Idle,
            eraser_color,
        }
    }

    /// Start a gesture at `point` using the settings at this instant.
    ///
    /// Any shape left over from an unfinished gesture is dropped. Returns
    /// false, leaving the builder idle, when no tool is selected.
    pub fn begin(&mut self, point: Point, settings: &ToolSettings) -> bool {
        if let Some(stale) = self.cancel() {
            log::debug!("Dropped unfinished {} gesture", stale.kind());
        }
        let Some(tool) = settings.tool else {
            log::debug!("Press at {point:?} ignored, no tool selected");
            return false;
        };

        let shape = self.create_shape(tool, point, settings);
        log::debug!("Begin {tool} gesture at {point:?}");
        self.state = BuilderState::Active { shape };
        true
    }

    /// Follow the pointer. Returns false when no gesture is active.
    pub fn update(&mut self, point: Point) -> bool {
        match &mut self.state {
            BuilderState::Active { shape } => {
                shape.set_end(point);
                shape.extend_trace(point);
                true
            }
            BuilderState::Idle => false,
        }
    }

    /// Finish the gesture at `point` and hand out the shape.
    ///
    /// The release position becomes the end point but is not added to a
    /// freehand or eraser trace.
    pub fn end(&mut self, point: Point) -> Option<Shape> {
        match std::mem::take(&mut self.state) {
            BuilderState::Active { mut shape } => {
                shape.set_end(point);
                log::debug!("End {} gesture at {point:?}", shape.kind());
                Some(shape)
            }
            BuilderState::Idle => None,
        }
    }

    /// Abandon the gesture without producing a shape.
    /// Returns the dropped shape, if any.
    pub fn cancel(&mut self) -> Option<Shape> {
        match std::mem::take(&mut self.state) {
            BuilderState::Active { shape } => Some(shape),
            BuilderState::Idle => None,
        }
    }

    /// Check if a gesture is active.
    pub fn is_active(&self) -> bool {
        matches!(self.state, BuilderState::Active { .. })
    }

    /// Shape being drawn, for preview rendering.
    pub fn in_progress(&self) -> Option<&Shape> {
        match &self.state {
            BuilderState::Active { shape } => Some(shape),
            BuilderState::Idle => None,
        }
    }

    fn create_shape(&self, tool: ToolKind, point: Point, settings: &ToolSettings) -> Shape {
        let style = ShapeStyle::new(settings.color, settings.filled);
        match tool {
            ToolKind::Rectangle => Shape::Rectangle(Rectangle::new(point, style)),
            ToolKind::Oval => Shape::Oval(Oval::new(point, style)),
            ToolKind::Line => Shape::Line(Line::new(point, settings.color)),
            ToolKind::Freehand => Shape::Freehand(Freehand::new(point, settings.color)),
            ToolKind::Erase => Shape::Erase(Erase::new(point, self.eraser_color)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(tool: ToolKind) -> ToolSettings {
        ToolSettings {
            tool: Some(tool),
            ..ToolSettings::default()
        }
    }

    #[test]
    fn test_tool_names() {
        assert_eq!("oval".parse::<ToolKind>(), Ok(ToolKind::Oval));
        assert_eq!(" FreeHand ".parse::<ToolKind>(), Ok(ToolKind::Freehand));
        assert_eq!(
            "spray".parse::<ToolKind>(),
            Err(ParseToolError("spray".to_string()))
        );
        for kind in ToolKind::ALL {
            assert_eq!(kind.name().parse::<ToolKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_default_settings() {
        let settings = ToolSettings::default();
        assert_eq!(settings.tool, Some(ToolKind::Rectangle));
        assert_eq!(settings.color, Rgba8::RED);
        assert!(!settings.filled);
    }

    #[test]
    fn test_tool_interaction() {
        let mut builder = ShapeBuilder::default();
        assert!(!builder.is_active());

        assert!(builder.begin(Point::new(0, 0), &settings(ToolKind::Rectangle)));
        assert!(builder.is_active());

        assert!(builder.update(Point::new(50, 50)));
        assert_eq!(builder.in_progress().map(Shape::end), Some(Point::new(50, 50)));

        let shape = builder.end(Point::new(100, 100));
        assert_eq!(shape.map(|s| s.end()), Some(Point::new(100, 100)));
        assert!(!builder.is_active());
    }

    #[test]
    fn test_degenerate_gesture() {
        let mut builder = ShapeBuilder::default();
        assert!(builder.begin(Point::new(10, 10), &settings(ToolKind::Freehand)));
        let Some(shape) = builder.end(Point::new(10, 10)) else {
            panic!("expected a shape");
        };
        assert_eq!(shape.anchor(), Point::new(10, 10));
        assert_eq!(shape.end(), Point::new(10, 10));
        assert_eq!(shape.trace(), Some(&[Point::new(10, 10)][..]));
    }

    #[test]
    fn test_trace_grows_one_point_per_move() {
        let mut builder = ShapeBuilder::default();
        assert!(builder.begin(Point::new(0, 0), &settings(ToolKind::Erase)));
        for i in 1..=4 {
            assert!(builder.update(Point::new(i, i)));
        }
        let shape = builder.end(Point::new(99, 99));
        let trace = shape.as_ref().and_then(Shape::trace).map(<[Point]>::len);
        assert_eq!(trace, Some(5));
    }

    #[test]
    fn test_settings_captured_at_press() {
        let mut builder = ShapeBuilder::default();
        let mut current = ToolSettings {
            tool: Some(ToolKind::Oval),
            color: Rgba8::BLUE,
            filled: true,
        };
        assert!(builder.begin(Point::new(0, 0), &current));
        current.color = Rgba8::GREEN;
        current.filled = false;
        current.tool = Some(ToolKind::Line);

        let shape = builder.end(Point::new(5, 5));
        let Some(shape) = shape else {
            panic!("expected a shape");
        };
        assert_eq!(shape.kind(), ToolKind::Oval);
        assert_eq!(*shape.style(), ShapeStyle::new(Rgba8::BLUE, true));
    }

    #[test]
    fn test_no_tool_stays_idle() {
        let mut builder = ShapeBuilder::default();
        let none = ToolSettings {
            tool: None,
            ..ToolSettings::default()
        };
        assert!(!builder.begin(Point::new(0, 0), &none));
        assert!(!builder.update(Point::new(5, 5)));
        assert!(builder.end(Point::new(5, 5)).is_none());
    }

    #[test]
    fn test_press_while_active_replaces_shape() {
        let mut builder = ShapeBuilder::default();
        assert!(builder.begin(Point::new(0, 0), &settings(ToolKind::Line)));
        assert!(builder.begin(Point::new(7, 7), &settings(ToolKind::Oval)));
        let shape = builder.in_progress().cloned();
        assert_eq!(shape.as_ref().map(Shape::kind), Some(ToolKind::Oval));
        assert_eq!(shape.map(|s| s.anchor()), Some(Point::new(7, 7)));
    }

    #[test]
    fn test_cancel_interaction() {
        let mut builder = ShapeBuilder::default();
        assert!(builder.begin(Point::new(0, 0), &settings(ToolKind::Rectangle)));
        assert!(builder.cancel().is_some());
        assert!(!builder.is_active());
        assert!(builder.cancel().is_none());
        assert!(builder.end(Point::new(1, 1)).is_none());
    }

    #[test]
    fn test_eraser_uses_background_color() {
        let mut builder = ShapeBuilder::new(Rgba8::BLACK);
        let erase = ToolSettings {
            tool: Some(ToolKind::Erase),
            color: Rgba8::RED,
            filled: false,
        };
        assert!(builder.begin(Point::new(0, 0), &erase));
        let color = builder.in_progress().map(|s| s.style().color);
        assert_eq!(color, Some(Rgba8::BLACK));
    }
}
