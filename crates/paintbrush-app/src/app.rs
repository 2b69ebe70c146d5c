//! Main application window.

use egui::{Color32, Context, Rect, Sense, pos2, vec2};
use paintbrush_core::{InputController, PanelCommand, Repaint, ViewportSize};
use paintbrush_render::{RenderContext, Renderer, SoftwareRenderer};
use peniko::Color;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::event_handler::{EventHandler, PointerSample};
use crate::present::TexturePresenter;
use crate::shortcuts::{ShortcutAction, ShortcutRegistry};
use crate::ui::{PanelView, render_panel};

/// Open the window and run until it is closed.
pub fn run(config: AppConfig) -> Result<(), AppError> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&config.title)
            .with_inner_size([config.width as f32, config.height as f32]),
        ..Default::default()
    };
    let title = config.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(PaintApp::new(cc, &config)))),
    )?;
    Ok(())
}

/// Application state owned by the UI thread.
pub struct PaintApp {
    controller: InputController,
    renderer: SoftwareRenderer,
    presenter: TexturePresenter,
    event_handler: EventHandler,
    background: Color,
    needs_repaint: bool,
}

impl PaintApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        log::info!(
            "Opening {}x{} canvas, background {}",
            config.width,
            config.height,
            config.background()
        );
        Self {
            controller: config.build_controller(),
            renderer: SoftwareRenderer::new(),
            presenter: TexturePresenter::new(cc.egui_ctx.clone()),
            event_handler: EventHandler::new(),
            background: config.background().into(),
            needs_repaint: true,
        }
    }

    fn mark(&mut self, repaint: Repaint) {
        if repaint.is_needed() {
            self.needs_repaint = true;
        }
    }

    fn apply(&mut self, command: PanelCommand) {
        let repaint = self.controller.apply(command);
        self.mark(repaint);
    }

    fn cancel_gesture(&mut self) {
        self.event_handler.reset();
        let repaint = self.controller.cancel_gesture();
        self.mark(repaint);
    }

    fn handle_focus(&mut self, ctx: &Context) {
        let focused = ctx.input(|i| i.viewport().focused);
        if focused == Some(false) && self.controller.is_drawing() {
            log::debug!("Window lost focus during a gesture");
            self.cancel_gesture();
        }
    }

    fn handle_shortcuts(&mut self, ctx: &Context) {
        for action in ctx.input(ShortcutRegistry::pressed) {
            match action {
                ShortcutAction::Command(command) => self.apply(command),
                ShortcutAction::ToggleFilled => {
                    let filled = !self.controller.settings().filled;
                    self.apply(PanelCommand::SetFilled(filled));
                }
                ShortcutAction::CancelGesture => self.cancel_gesture(),
            }
        }
    }

    fn show_canvas(&mut self, ui: &mut egui::Ui) {
        let response = ui.allocate_response(ui.available_size(), Sense::drag());
        let canvas = response.rect;
        let viewport = ViewportSize::new(canvas.width() as u32, canvas.height() as u32);
        let repaint = self.controller.resize(viewport);
        self.mark(repaint);

        let sample = ui.input(PointerSample::from_input);
        for event in self.event_handler.handle(sample, canvas) {
            let repaint = self.controller.handle_pointer(event);
            self.mark(repaint);
        }

        if self.needs_repaint && !viewport.is_empty() {
            self.redraw();
        }

        if let Some(texture) = self.presenter.texture() {
            let [width, height] = texture.size();
            let target = Rect::from_min_size(canvas.min, vec2(width as f32, height as f32));
            let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
            ui.painter().image(texture.id(), target, uv, Color32::WHITE);
        }
    }

    fn redraw(&mut self) {
        let ctx = RenderContext::from_controller(&self.controller).with_background(self.background);
        if let Err(err) = self.renderer.render(&ctx, &mut self.presenter) {
            log::error!("Render failed: {err}");
        }
        self.needs_repaint = false;
    }
}

impl eframe::App for PaintApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_focus(ctx);
        self.handle_shortcuts(ctx);

        let view = PanelView::from_controller(&self.controller);
        for command in render_panel(ctx, &view) {
            self.apply(command);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.show_canvas(ui));
    }
}
