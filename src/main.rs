mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::Result;
use app::CordExplorerApp;
use config::{DashboardConfig, CONFIG_FILE};
use eframe::egui;

fn main() -> Result<()> {
    env_logger::init();

    let config = DashboardConfig::load_or_default(Path::new(CONFIG_FILE))?;
    log::info!("Opening {}", config.data_path.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "CORD-19 Analysis",
        options,
        Box::new(|_cc| Ok(Box::new(CordExplorerApp::new(config)))),
    )
    .map_err(|e| anyhow::anyhow!("UI error: {e}"))
}
