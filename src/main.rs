mod app;
mod ui;

use eframe::egui;

use polaris_explorer::config::AppConfig;

use app::ExplorerApp;

fn main() {
    env_logger::init();

    let config = AppConfig::from_env();
    log::info!("Using backend at {}", config.api_url);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Polaris \u{2014} Career Explorer",
        options,
        Box::new(|_cc| Ok(Box::new(ExplorerApp::new(config)))),
    )
    .expect("Failed to start Polaris Explorer");
}
