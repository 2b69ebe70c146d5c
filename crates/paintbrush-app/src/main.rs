//! Main application entry point.

fn main() {
    env_logger::init();
    log::info!("Starting PaintBrush");
    paintbrush_app::ShortcutRegistry::print_all();

    let config = paintbrush_app::AppConfig::from_env();
    if let Err(err) = paintbrush_app::run(config) {
        log::error!("{err}");
        std::process::exit(1);
    }
}
