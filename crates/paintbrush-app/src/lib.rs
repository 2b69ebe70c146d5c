//! PaintBrush Application
//!
//! Desktop shell around the PaintBrush canvas: window, tool panel, pointer
//! and keyboard plumbing, configuration.

mod app;
mod config;
mod error;
mod event_handler;
mod present;
mod shortcuts;
mod ui;

pub use app::{PaintApp, run};
pub use config::{AppConfig, CONFIG_ENV_VAR};
pub use error::AppError;
pub use event_handler::{EventHandler, PointerSample};
pub use present::TexturePresenter;
pub use shortcuts::{Shortcut, ShortcutAction, ShortcutRegistry};
