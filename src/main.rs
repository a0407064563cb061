mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::MatForgeApp;
use eframe::egui;

/// Backing file the catalog lives in, next to the executable.
const CATALOG_FILE: &str = "materials_data.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "MatForge – Material Selection Tool",
        options,
        Box::new(|_cc| Ok(Box::new(MatForgeApp::new(PathBuf::from(CATALOG_FILE))))),
    )
}
