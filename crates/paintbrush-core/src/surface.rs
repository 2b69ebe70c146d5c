//! Drawing surface abstraction shapes paint onto.

use kurbo::BezPath;

use crate::color::Rgba8;

/// Target for shape drawing.
///
/// Shapes describe themselves as paths; the surface decides how those paths
/// become pixels. Strokes are one pixel wide and fills cover the path
/// interior using the nonzero rule.
pub trait DrawSurface {
    /// Stroke the outline of `path`.
    fn stroke_path(&mut self, path: &BezPath, color: Rgba8);

    /// Fill the interior of `path`.
    fn fill_path(&mut self, path: &BezPath, color: Rgba8);
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum DrawOp {
        Stroke { path: BezPath, color: Rgba8 },
        Fill { path: BezPath, color: Rgba8 },
    }

    impl DrawOp {
        pub(crate) fn is_fill(&self) -> bool {
            matches!(self, DrawOp::Fill { .. })
        }

        pub(crate) fn color(&self) -> Rgba8 {
            match self {
                DrawOp::Stroke { color, .. } | DrawOp::Fill { color, .. } => *color,
            }
        }

        pub(crate) fn path(&self) -> &BezPath {
            match self {
                DrawOp::Stroke { path, .. } | DrawOp::Fill { path, .. } => path,
            }
        }
    }

    /// Surface that records every primitive it receives.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingSurface {
        pub(crate) ops: Vec<DrawOp>,
    }

    impl DrawSurface for RecordingSurface {
        fn stroke_path(&mut self, path: &BezPath, color: Rgba8) {
            self.ops.push(DrawOp::Stroke {
                path: path.clone(),
                color,
            });
        }

        fn fill_path(&mut self, path: &BezPath, color: Rgba8) {
            self.ops.push(DrawOp::Fill {
                path: path.clone(),
                color,
            });
        }
    }
}
