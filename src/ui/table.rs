use eframe::egui::{Align, Layout, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Dataset table (central panel, below the plot)
// ---------------------------------------------------------------------------

/// Render the full cleaned dataset as a striped table, columns in
/// source-header order.
pub fn dataset_table(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .columns(Column::auto().at_least(60.0), dataset.columns.len())
        .header(20.0, |mut header| {
            for name in &dataset.columns {
                header.col(|ui: &mut Ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, dataset.len(), |mut row| {
                let record = &dataset.rows[row.index()];
                for name in &dataset.columns {
                    row.col(|ui: &mut Ui| {
                        if let Some(value) = record.get(name) {
                            ui.label(value.to_string());
                        }
                    });
                }
            });
        });
}
