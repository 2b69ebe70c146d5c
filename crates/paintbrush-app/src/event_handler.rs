//! Translation of egui pointer state into canvas pointer events.

use egui::{Pos2, Rect};
use paintbrush_core::{Point, PointerEvent};

/// Primary-button pointer state for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    pub pressed: bool,
    pub released: bool,
    pub position: Option<Pos2>,
}

impl PointerSample {
    pub fn from_input(input: &egui::InputState) -> Self {
        Self {
            pressed: input.pointer.primary_pressed(),
            released: input.pointer.primary_released(),
            position: input.pointer.interact_pos(),
        }
    }
}

/// Tracks a primary-button drag that started on the canvas.
///
/// A press inside the canvas yields `Down`, every change of integer position
/// while held yields `Move`, and the release yields `Up`, even when the
/// pointer has left the canvas.
#[derive(Debug, Default)]
pub struct EventHandler {
    dragging: bool,
    last: Option<Point>,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, sample: PointerSample, canvas: Rect) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        let point = sample.position.map(|pos| to_canvas_point(pos, canvas));
        let mut released = sample.released;

        if self.dragging {
            if sample.pressed && released {
                // The release ends the held drag; the press starts a new one.
                if let Some(position) = self.last {
                    events.push(PointerEvent::Up { position });
                }
                self.reset();
                released = false;
            } else if let Some(position) = point {
                if self.last != Some(position) {
                    self.last = Some(position);
                    events.push(PointerEvent::Move { position });
                }
            }
        }

        if sample.pressed && !self.dragging {
            if let (Some(pos), Some(position)) = (sample.position, point) {
                if canvas.contains(pos) {
                    self.dragging = true;
                    self.last = Some(position);
                    events.push(PointerEvent::Down { position });
                }
            }
        }

        if released && self.dragging {
            if let Some(position) = point.or(self.last) {
                events.push(PointerEvent::Up { position });
            }
            self.reset();
        }
        events
    }

    /// Forget the current drag; its release will not be reported.
    pub fn reset(&mut self) {
        self.dragging = false;
        self.last = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}

/// Integer pixel under `pos`, relative to the canvas origin.
pub fn to_canvas_point(pos: Pos2, canvas: Rect) -> Point {
    let local = pos - canvas.min;
    Point::new(local.x.floor() as i32, local.y.floor() as i32)
}
