//! Input events delivered to the controller.

use crate::color::Rgba8;
use crate::point::Point;
use crate::tools::ToolKind;

/// Primary-button pointer event on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
}

/// Size of the drawing area in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A viewport with no pixels cannot be rendered.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Commands issued by the tool panel or keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelCommand {
    SelectTool(ToolKind),
    SelectColor(Rgba8),
    SetFilled(bool),
    Undo,
    Redo,
    ClearAll,
}
