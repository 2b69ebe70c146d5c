//! Renderer trait abstraction.

use paintbrush_core::{InputController, Shape, ShapeModel, ViewportSize};
use peniko::Color;
use thiserror::Error;

use crate::present::PresentTarget;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Viewport is empty, nothing to render")]
    EmptyViewport,
    #[error("Could not allocate a {width}x{height} back buffer")]
    Allocation { width: u32, height: u32 },
    #[error("Present failed: {0}")]
    Present(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Committed shapes in paint order.
    pub shapes: &'a [Shape],
    /// Shape still being drawn, painted above everything else.
    pub in_progress: Option<&'a Shape>,
    /// Viewport size in pixels.
    pub viewport_size: ViewportSize,
    /// Background color.
    pub background_color: Color,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context for the committed shapes of `model`.
    pub fn new(model: &'a ShapeModel, viewport_size: ViewportSize) -> Self {
        Self {
            shapes: model.shapes(),
            in_progress: None,
            viewport_size,
            background_color: Color::WHITE,
        }
    }

    /// Context showing everything the controller holds, including the shape
    /// under the pointer.
    pub fn from_controller(controller: &'a InputController) -> Self {
        Self::new(controller.model(), controller.viewport())
            .with_in_progress(controller.in_progress())
    }

    /// Set the in-progress shape.
    pub fn with_in_progress(mut self, shape: Option<&'a Shape>) -> Self {
        self.in_progress = shape;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }
}

/// What a rendered frame contained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Shapes painted, counting the in-progress one.
    pub shapes: usize,
    /// Stroke and fill calls issued.
    pub primitives: usize,
    /// Whether the back buffer was recreated for this frame.
    pub resized: bool,
}

/// Trait for rendering backends.
pub trait Renderer: Send + Sync {
    /// Compose a complete frame off-screen and present it to `target` once.
    fn render(
        &mut self,
        ctx: &RenderContext<'_>,
        target: &mut dyn PresentTarget,
    ) -> RenderResult<FrameStats>;

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext<'_>) -> Color {
        ctx.background_color
    }
}
