//! CPU renderer drawing into an off-screen tiny-skia pixmap.

use kurbo::{BezPath, PathEl};
use paintbrush_core::{DrawSurface, Rgba8, ViewportSize};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::present::PresentTarget;
use crate::renderer::{FrameStats, RenderContext, RenderResult, Renderer, RendererError};

/// Renderer that composes each frame in a back buffer before presenting it.
#[derive(Debug, Default)]
pub struct SoftwareRenderer {
    back_buffer: Option<Pixmap>,
    frames: u64,
}

impl SoftwareRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames rendered.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Make sure the back buffer matches the viewport.
    /// Returns true if a new buffer was allocated.
    fn ensure_back_buffer(&mut self, size: ViewportSize) -> RenderResult<bool> {
        let matches = self
            .back_buffer
            .as_ref()
            .is_some_and(|p| p.width() == size.width && p.height() == size.height);
        if matches {
            return Ok(false);
        }
        if size.is_empty() {
            return Err(RendererError::EmptyViewport);
        }

        let pixmap = Pixmap::new(size.width, size.height).ok_or(RendererError::Allocation {
            width: size.width,
            height: size.height,
        })?;
        log::debug!("Allocated {}x{} back buffer", size.width, size.height);
        self.back_buffer = Some(pixmap);
        Ok(true)
    }
}

impl Renderer for SoftwareRenderer {
    fn render(
        &mut self,
        ctx: &RenderContext<'_>,
        target: &mut dyn PresentTarget,
    ) -> RenderResult<FrameStats> {
        let resized = self.ensure_back_buffer(ctx.viewport_size)?;
        let background = Rgba8::from(self.background_color(ctx));
        let Some(back) = self.back_buffer.as_mut() else {
            return Err(RendererError::EmptyViewport);
        };

        back.fill(to_skia_color(background));
        let mut painter = PixmapPainter::new(back);
        for shape in ctx.shapes {
            shape.draw(&mut painter);
        }
        if let Some(shape) = ctx.in_progress {
            shape.draw(&mut painter);
        }

        let stats = FrameStats {
            shapes: ctx.shapes.len() + usize::from(ctx.in_progress.is_some()),
            primitives: painter.primitives,
            resized,
        };
        target.present(back)?;
        self.frames += 1;
        log::debug!(
            "Frame {}: {} shapes, {} primitives",
            self.frames,
            stats.shapes,
            stats.primitives
        );
        Ok(stats)
    }
}

/// [`DrawSurface`] backed by a pixmap.
///
/// Anti-aliasing is off. Strokes are one pixel wide and shifted half a pixel
/// so integer coordinates land on pixel centers.
pub struct PixmapPainter<'a> {
    pixmap: &'a mut Pixmap,
    primitives: usize,
}

impl<'a> PixmapPainter<'a> {
    pub fn new(pixmap: &'a mut Pixmap) -> Self {
        Self {
            pixmap,
            primitives: 0,
        }
    }
}

impl DrawSurface for PixmapPainter<'_> {
    fn stroke_path(&mut self, path: &BezPath, color: Rgba8) {
        self.primitives += 1;
        let Some(path) = to_skia_path(path) else {
            return;
        };
        let stroke = Stroke {
            width: 1.0,
            ..Default::default()
        };
        self.pixmap.stroke_path(
            &path,
            &solid_paint(color),
            &stroke,
            Transform::from_translate(0.5, 0.5),
            None,
        );
    }

    fn fill_path(&mut self, path: &BezPath, color: Rgba8) {
        self.primitives += 1;
        let Some(path) = to_skia_path(path) else {
            return;
        };
        self.pixmap.fill_path(
            &path,
            &solid_paint(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }
}

fn solid_paint(color: Rgba8) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = false;
    paint
}

fn to_skia_color(color: Rgba8) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a)
}

/// Convert a kurbo path. Returns `None` for paths tiny-skia rejects, such as
/// empty ones.
fn to_skia_path(path: &BezPath) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => pb.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => pb.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(p1, p2) => pb.quad_to(p1.x as f32, p1.y as f32, p2.x as f32, p2.y as f32),
            PathEl::CurveTo(p1, p2, p3) => pb.cubic_to(
                p1.x as f32,
                p1.y as f32,
                p2.x as f32,
                p2.y as f32,
                p3.x as f32,
                p3.y as f32,
            ),
            PathEl::ClosePath => pb.close(),
        }
    }
    pb.finish()
}
