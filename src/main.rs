mod app;
mod color;
mod config;
mod data;
mod error;
mod state;
mod ui;

use anyhow::{Context, Result, anyhow};
use app::RentTrendApp;
use config::Config;
use eframe::egui;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::default();
    let chart = data::pipeline::run(&config)
        .with_context(|| format!("preparing rent series from {}", config.data_path.display()))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([600.0, 400.0])
            .with_title(&config.labels.title),
        ..Default::default()
    };

    let state = AppState::new(chart, config.labels.clone());

    // Blocks until the window is closed.
    eframe::run_native(
        &config.labels.title,
        options,
        Box::new(|_cc| Ok(Box::new(RentTrendApp::new(state)))),
    )
    .map_err(|e| anyhow!("chart window failed: {e}"))
}
