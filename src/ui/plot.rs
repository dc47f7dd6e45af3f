use std::collections::BTreeMap;

use eframe::egui::{self, Color32, Ui};
use egui_plot::{Legend, Plot, PlotPoints, Points};

use crate::data::model::{CellValue, COL_AVAILABLE_BEDS, COL_REVENUE, COL_YEAR};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Revenue scatter (central panel)
// ---------------------------------------------------------------------------

/// Render the filtered view as a scatter of available beds vs operating
/// revenue, one series per year. An empty filter result is a valid state
/// and gets an explicit placeholder instead of a bare plot.
pub fn revenue_scatter(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file to view hospital data  (File → Open…)");
        });
        return;
    };

    let plot_height = ui.available_height() * 0.55;

    if state.visible_rows.is_empty() {
        // Keep the table below visible: only the plot area shows the
        // placeholder.
        ui.allocate_ui(egui::vec2(ui.available_width(), plot_height), |ui: &mut Ui| {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("No hospitals match the current filters.");
            });
        });
        return;
    }

    // Group the visible rows into one point series per year. Rows missing
    // either coordinate carry no point.
    let mut by_year: BTreeMap<String, Vec<[f64; 2]>> = BTreeMap::new();
    for &idx in &state.visible_rows {
        let row = &dataset.rows[idx];
        let beds = row.get(COL_AVAILABLE_BEDS).and_then(CellValue::as_f64);
        let revenue = row.get(COL_REVENUE).and_then(CellValue::as_f64);
        let (Some(beds), Some(revenue)) = (beds, revenue) else {
            continue;
        };
        let Some(year) = row.get(COL_YEAR).filter(|v| !v.is_missing()) else {
            continue;
        };
        by_year
            .entry(year.to_string())
            .or_default()
            .push([beds, revenue]);
    }

    Plot::new("revenue_scatter")
        .legend(Legend::default())
        .x_axis_label("Available Beds")
        .y_axis_label("Total Operating Rev")
        .height(plot_height)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (year, points) in &by_year {
                let color = state
                    .year_colors
                    .as_ref()
                    .map(|c| c.color_for(year))
                    .unwrap_or(Color32::LIGHT_BLUE);

                let series: PlotPoints = points.iter().copied().collect();
                plot_ui.points(
                    Points::new(series)
                        .name(year)
                        .color(color)
                        .radius(3.0),
                );
            }
        });
}
