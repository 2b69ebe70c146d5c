//! Visible surfaces a finished frame is copied to.

use paintbrush_core::Rgba8;
use tiny_skia::Pixmap;

use crate::renderer::RenderResult;

/// Destination for finished frames.
///
/// A renderer calls [`PresentTarget::present`] exactly once per frame, after
/// the frame is complete, so a target never shows a half-drawn scene.
pub trait PresentTarget {
    fn present(&mut self, frame: &Pixmap) -> RenderResult<()>;
}

/// In-memory front surface.
#[derive(Debug, Default)]
pub struct FrameBuffer {
    front: Option<Pixmap>,
    presents: u64,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames presented so far.
    pub fn present_count(&self) -> u64 {
        self.presents
    }

    /// Size of the last presented frame.
    pub fn size(&self) -> Option<(u32, u32)> {
        self.front.as_ref().map(|p| (p.width(), p.height()))
    }

    /// Premultiplied RGBA bytes of the last presented frame.
    pub fn data(&self) -> Option<&[u8]> {
        self.front.as_ref().map(Pixmap::data)
    }

    /// Read back one pixel of the last presented frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        let color = self.front.as_ref()?.pixel(x, y)?.demultiply();
        Some(Rgba8::new(
            color.red(),
            color.green(),
            color.blue(),
            color.alpha(),
        ))
    }
}

impl PresentTarget for FrameBuffer {
    fn present(&mut self, frame: &Pixmap) -> RenderResult<()> {
        match &mut self.front {
            Some(front) if front.width() == frame.width() && front.height() == frame.height() => {
                front.data_mut().copy_from_slice(frame.data());
            }
            _ => self.front = Some(frame.clone()),
        }
        self.presents += 1;
        Ok(())
    }
}
