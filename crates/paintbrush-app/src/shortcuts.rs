//! Keyboard shortcut registry and documentation.

use egui::{Event, InputState, Key};
use paintbrush_core::{PanelCommand, Rgba8, ToolKind};

/// What a shortcut does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    /// Same effect as the matching panel control.
    Command(PanelCommand),
    /// Flip the "Filled" checkbox.
    ToggleFilled,
    /// Drop the shape under the pointer without committing it.
    CancelGesture,
}

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: Key,
    pub ctrl: bool,
    pub shift: bool,
    pub description: &'static str,
    pub action: ShortcutAction,
}

impl Shortcut {
    pub const fn new(
        key: Key,
        ctrl: bool,
        shift: bool,
        description: &'static str,
        action: ShortcutAction,
    ) -> Self {
        Self {
            key,
            ctrl,
            shift,
            description,
            action,
        }
    }

    /// Format the shortcut for display (e.g., "Ctrl+Z").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(self.key.name());
        parts.join("+")
    }

    fn matches(&self, key: Key, ctrl: bool, shift: bool) -> bool {
        self.key == key && self.ctrl == ctrl && self.shift == shift
    }
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        use PanelCommand::*;
        use ShortcutAction::Command;

        vec![
            Shortcut::new(Key::Z, true, false, "Undo", Command(Undo)),
            Shortcut::new(Key::Z, true, true, "Redo", Command(Redo)),
            Shortcut::new(Key::Y, true, false, "Redo", Command(Redo)),
            Shortcut::new(Key::Delete, false, false, "Clear all", Command(ClearAll)),
            Shortcut::new(Key::R, false, false, "Rectangle tool", Command(SelectTool(ToolKind::Rectangle))),
            Shortcut::new(Key::O, false, false, "Oval tool", Command(SelectTool(ToolKind::Oval))),
            Shortcut::new(Key::L, false, false, "Line tool", Command(SelectTool(ToolKind::Line))),
            Shortcut::new(Key::F, false, false, "Freehand tool", Command(SelectTool(ToolKind::Freehand))),
            Shortcut::new(Key::E, false, false, "Erase tool", Command(SelectTool(ToolKind::Erase))),
            Shortcut::new(Key::Num1, false, false, "Red", Command(SelectColor(Rgba8::RED))),
            Shortcut::new(Key::Num2, false, false, "Blue", Command(SelectColor(Rgba8::BLUE))),
            Shortcut::new(Key::Num3, false, false, "Green", Command(SelectColor(Rgba8::GREEN))),
            Shortcut::new(Key::Space, false, false, "Toggle filled shapes", ShortcutAction::ToggleFilled),
            Shortcut::new(Key::Escape, false, false, "Cancel current shape", ShortcutAction::CancelGesture),
        ]
    }

    /// Look up the action bound to a key combination.
    pub fn find(key: Key, ctrl: bool, shift: bool) -> Option<ShortcutAction> {
        Self::all()
            .into_iter()
            .find(|shortcut| shortcut.matches(key, ctrl, shift))
            .map(|shortcut| shortcut.action)
    }

    /// Actions for every shortcut pressed this frame, in event order.
    pub fn pressed(input: &InputState) -> Vec<ShortcutAction> {
        input
            .events
            .iter()
            .filter_map(|event| match event {
                Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } => Self::find(*key, modifiers.command, modifiers.shift),
                _ => None,
            })
            .collect()
    }

    /// Print all shortcuts to console.
    pub fn print_all() {
        println!("\n=== Keyboard Shortcuts ===");
        for shortcut in Self::all() {
            println!("  {:20} {}", shortcut.format(), shortcut.description);
        }
        println!();
    }
}
