//! Tool panel.

use egui::{Color32, Context, RichText};
use paintbrush_core::{InputController, PALETTE, PanelCommand, Rgba8, ToolKind};

/// Snapshot of controller state shown by the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelView {
    pub tool: Option<ToolKind>,
    pub color: Rgba8,
    pub filled: bool,
    pub can_undo: bool,
    pub can_redo: bool,
    pub shape_count: usize,
}

impl PanelView {
    pub fn from_controller(controller: &InputController) -> Self {
        let settings = controller.settings();
        Self {
            tool: settings.tool,
            color: settings.color,
            filled: settings.filled,
            can_undo: controller.can_undo(),
            can_redo: controller.can_redo(),
            shape_count: controller.shape_count(),
        }
    }
}

pub fn to_color32(color: Rgba8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

/// Render the left tool panel and return the commands triggered this frame.
pub fn render_panel(ctx: &Context, view: &PanelView) -> Vec<PanelCommand> {
    let mut commands = Vec::new();

    egui::SidePanel::left("tool_panel")
        .resizable(false)
        .show(ctx, |ui| {
            ui.heading("Tools");
            for tool in ToolKind::ALL {
                if ui
                    .selectable_label(view.tool == Some(tool), tool.label())
                    .clicked()
                {
                    commands.push(PanelCommand::SelectTool(tool));
                }
            }

            ui.separator();
            ui.heading("Color");
            ui.horizontal(|ui| {
                for (name, color) in PALETTE {
                    let swatch = egui::Button::new(RichText::new(name).color(Color32::WHITE))
                        .fill(to_color32(color))
                        .selected(view.color == color);
                    if ui.add(swatch).clicked() {
                        commands.push(PanelCommand::SelectColor(color));
                    }
                }
            });

            let mut filled = view.filled;
            if ui.checkbox(&mut filled, "Filled").changed() {
                commands.push(PanelCommand::SetFilled(filled));
            }

            ui.separator();
            ui.horizontal(|ui| {
                if ui.add_enabled(view.can_undo, egui::Button::new("Undo")).clicked() {
                    commands.push(PanelCommand::Undo);
                }
                if ui.add_enabled(view.can_redo, egui::Button::new("Redo")).clicked() {
                    commands.push(PanelCommand::Redo);
                }
            });
            if ui.button("Clear All").clicked() {
                commands.push(PanelCommand::ClearAll);
            }

            ui.separator();
            ui.label(format!("Shapes: {}", view.shape_count));
        });

    commands
}
