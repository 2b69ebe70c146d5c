//! Glue between input events, the gesture builder and the shape history.

use crate::color::Rgba8;
use crate::input::{PanelCommand, PointerEvent, ViewportSize};
use crate::model::ShapeModel;
use crate::point::Point;
use crate::shapes::Shape;
use crate::tools::{ParseToolError, ShapeBuilder, ToolKind, ToolSettings};

/// Whether the visible frame is stale after handling an input.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repaint {
    Needed,
    Skip,
}

impl Repaint {
    pub fn when(changed: bool) -> Self {
        if changed { Repaint::Needed } else { Repaint::Skip }
    }

    pub fn is_needed(self) -> bool {
        self == Repaint::Needed
    }
}

/// Owns the drawing state and applies every input to it.
#[derive(Debug, Clone)]
pub struct InputController {
    model: ShapeModel,
    builder: ShapeBuilder,
    settings: ToolSettings,
    viewport: ViewportSize,
}

impl Default for InputController {
    fn default() -> Self {
        Self::new(ToolSettings::default(), Rgba8::WHITE)
    }
}

impl InputController {
    /// Create a controller. `background` is painted by the eraser.
    pub fn new(settings: ToolSettings, background: Rgba8) -> Self {
        Self {
            model: ShapeModel::new(),
            builder: ShapeBuilder::new(background),
            settings,
            viewport: ViewportSize::default(),
        }
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) -> Repaint {
        match event {
            PointerEvent::Down { position } => self.pointer_down(position),
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up { position } => self.pointer_up(position),
        }
    }

    /// Start a gesture. Undone shapes become unreachable even if the
    /// gesture never commits.
    pub fn pointer_down(&mut self, position: Point) -> Repaint {
        self.model.discard_redo();
        let had_stale = self.builder.is_active();
        let started = self.builder.begin(position, &self.settings);
        Repaint::when(started || had_stale)
    }

    pub fn pointer_move(&mut self, position: Point) -> Repaint {
        Repaint::when(self.builder.update(position))
    }

    /// Finish the gesture and commit its shape.
    pub fn pointer_up(&mut self, position: Point) -> Repaint {
        match self.builder.end(position) {
            Some(shape) => {
                self.model.commit(shape);
                Repaint::Needed
            }
            None => Repaint::Skip,
        }
    }

    /// Drop the in-progress shape without committing it.
    pub fn cancel_gesture(&mut self) -> Repaint {
        match self.builder.cancel() {
            Some(shape) => {
                log::debug!("Cancelled {} gesture", shape.kind());
                Repaint::Needed
            }
            None => Repaint::Skip,
        }
    }

    pub fn apply(&mut self, command: PanelCommand) -> Repaint {
        match command {
            PanelCommand::SelectTool(tool) => {
                log::debug!("Selected tool {tool}");
                self.settings.tool = Some(tool);
                Repaint::Skip
            }
            PanelCommand::SelectColor(color) => {
                log::debug!("Selected color {color}");
                self.settings.color = color;
                Repaint::Skip
            }
            PanelCommand::SetFilled(filled) => {
                self.settings.filled = filled;
                Repaint::Skip
            }
            PanelCommand::Undo => Repaint::when(self.model.undo()),
            PanelCommand::Redo => Repaint::when(self.model.redo()),
            PanelCommand::ClearAll => {
                let changed = !self.model.is_empty() || self.model.can_redo();
                self.model.clear();
                Repaint::when(changed)
            }
        }
    }

    /// Select a tool by name. Unknown names leave no tool selected, so
    /// later presses are ignored until a valid tool is chosen.
    pub fn select_tool_named(&mut self, name: &str) -> Result<ToolKind, ParseToolError> {
        match name.parse::<ToolKind>() {
            Ok(tool) => {
                self.settings.tool = Some(tool);
                Ok(tool)
            }
            Err(err) => {
                log::warn!("{err}, pointer input will be ignored");
                self.settings.tool = None;
                Err(err)
            }
        }
    }

    pub fn resize(&mut self, viewport: ViewportSize) -> Repaint {
        if viewport == self.viewport {
            return Repaint::Skip;
        }
        log::debug!("Viewport resized to {}x{}", viewport.width, viewport.height);
        self.viewport = viewport;
        Repaint::Needed
    }

    pub fn model(&self) -> &ShapeModel {
        &self.model
    }

    pub fn in_progress(&self) -> Option<&Shape> {
        self.builder.in_progress()
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    pub fn is_drawing(&self) -> bool {
        self.builder.is_active()
    }

    pub fn shape_count(&self) -> usize {
        self.model.len()
    }

    pub fn can_undo(&self) -> bool {
        self.model.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.model.can_redo()
    }
}
