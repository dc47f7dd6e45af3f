use eframe::egui;

use crate::data::model::HospitalDataset;
use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct WardBoardApp {
    pub state: AppState,
}

impl WardBoardApp {
    /// Start with a dataset already loaded and cleaned at startup.
    pub fn with_dataset(dataset: HospitalDataset) -> Self {
        let mut state = AppState::default();
        state.set_dataset(dataset);
        Self { state }
    }
}

impl eframe::App for WardBoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(230.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: summary cards, scatter, table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::summary_strip(ui, &self.state);
            ui.separator();
            plot::revenue_scatter(ui, &self.state);
            ui.separator();
            table::dataset_table(ui, &self.state);
        });
    }
}
