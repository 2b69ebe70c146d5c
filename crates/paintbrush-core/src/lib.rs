//! PaintBrush Core Library
//!
//! Platform-agnostic drawing state for the PaintBrush canvas: shapes, the
//! gesture builder, the undo/redo history and the input controller that ties
//! them together. Rendering lives in `paintbrush-render`.

pub mod color;
pub mod controller;
pub mod input;
pub mod model;
pub mod point;
pub mod shapes;
pub mod surface;
pub mod tools;

pub use color::{PALETTE, ParseColorError, Rgba8};
pub use controller::{InputController, Repaint};
pub use input::{PanelCommand, PointerEvent, ViewportSize};
pub use model::ShapeModel;
pub use point::{Frame, Point};
pub use shapes::{ERASER_DIAMETER, Shape, ShapeId, ShapeStyle, ShapeTrait};
pub use surface::DrawSurface;
pub use tools::{ParseToolError, ShapeBuilder, ToolKind, ToolSettings};
