//! PaintBrush Render Library
//!
//! Renderer abstraction and implementations for PaintBrush.
//! The default implementation rasterizes on the CPU with tiny-skia into an
//! off-screen buffer and presents each finished frame in one copy.

mod present;
mod renderer;
mod software;

pub use present::{FrameBuffer, PresentTarget};
pub use renderer::{FrameStats, RenderContext, RenderResult, Renderer, RendererError};
pub use software::{PixmapPainter, SoftwareRenderer};
pub use tiny_skia::Pixmap;
