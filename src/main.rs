mod app;
mod config;
mod data;
mod pipeline;
mod processing;
mod render;
mod state;
mod ui;

use app::StatPairApp;
use config::AppConfig;
use eframe::egui;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("StatPair")
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([860.0, 600.0]),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    eframe::run_native(
        "StatPair",
        options,
        Box::new(|cc| Ok(Box::new(StatPairApp::new(cc, config)))),
    )
}
