mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::WardBoardApp;
use eframe::egui;

/// Where the bundled sample lives; `cargo run --bin generate_sample`
/// rewrites it.
const DEFAULT_DATA_PATH: &str = "data/hospital-utilization.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

    // A dashboard without data is useless: load failures are fatal here,
    // before any window opens.
    let dataset = match data::loader::load_csv(&path) {
        Ok(raw) => data::clean::clean_dataset(&raw),
        Err(e) => {
            log::error!("Failed to load {}: {e:#}", path.display());
            std::process::exit(1);
        }
    };
    log::info!(
        "Loaded {} hospital records from {}",
        dataset.len(),
        path.display()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Hospital Utilization - Four Quarter Summary",
        options,
        Box::new(move |_cc| Ok(Box::new(WardBoardApp::with_dataset(dataset)))),
    )
}
