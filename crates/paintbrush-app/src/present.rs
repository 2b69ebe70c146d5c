//! Presents rendered frames as an egui texture.

use egui::{ColorImage, Context, TextureHandle, TextureOptions};
use paintbrush_render::{Pixmap, PresentTarget, RenderResult};

/// Front surface shown by the canvas.
///
/// Each present replaces the whole texture with the finished frame.
pub struct TexturePresenter {
    ctx: Context,
    texture: Option<TextureHandle>,
}

impl TexturePresenter {
    pub fn new(ctx: Context) -> Self {
        Self { ctx, texture: None }
    }

    /// Texture holding the last presented frame.
    pub fn texture(&self) -> Option<&TextureHandle> {
        self.texture.as_ref()
    }
}

impl PresentTarget for TexturePresenter {
    fn present(&mut self, frame: &Pixmap) -> RenderResult<()> {
        let size = [frame.width() as usize, frame.height() as usize];
        let image = ColorImage::from_rgba_premultiplied(size, frame.data());
        match &mut self.texture {
            Some(texture) => texture.set(image, TextureOptions::NEAREST),
            None => {
                self.texture = Some(self.ctx.load_texture("canvas", image, TextureOptions::NEAREST));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_creates_then_reuses_texture() {
        let mut presenter = TexturePresenter::new(Context::default());
        assert!(presenter.texture().is_none());

        let Some(frame) = Pixmap::new(8, 4) else {
            panic!("pixmap allocation failed");
        };
        assert!(presenter.present(&frame).is_ok());
        let id = presenter.texture().map(TextureHandle::id);
        assert!(id.is_some());

        assert!(presenter.present(&frame).is_ok());
        assert_eq!(presenter.texture().map(TextureHandle::id), id);
        assert_eq!(presenter.texture().map(TextureHandle::size), Some([8, 4]));
    }
}
