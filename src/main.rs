mod analysis;
mod app;
mod color;
mod data;
mod state;
mod stats;
mod ui;

use anyhow::Context;
use app::TippingApp;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let dataset = data::loader::load_embedded().context("loading bundled tips dataset")?;
    log::info!(
        "Loaded {} tipping records, bill extent {:.2}–{:.2}",
        dataset.len(),
        dataset.bill_extent.0,
        dataset.bill_extent.1
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Restaurant Tipping",
        options,
        Box::new(move |_cc| Ok(Box::new(TippingApp::new(AppState::new(dataset))))),
    )
    .map_err(|e| anyhow::anyhow!("eframe exited with error: {e}"))
}
