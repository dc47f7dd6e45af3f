use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel: revenue interval, year selection, reset.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    if state.dataset.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    // Clone what we need so we can mutate state inside the closures.
    let all_years: Vec<String> = state.default_predicate.years.iter().cloned().collect();
    let (min_rev, max_rev) = (
        state.default_predicate.revenue_lo,
        state.default_predicate.revenue_hi,
    );

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Revenue interval ----
            ui.strong("Total Operating Revenue");
            let mut lo = state.predicate.revenue_lo;
            let mut hi = state.predicate.revenue_hi;
            let lo_changed = ui
                .add(egui::Slider::new(&mut lo, min_rev..=max_rev).prefix("$").text("min"))
                .changed();
            let hi_changed = ui
                .add(egui::Slider::new(&mut hi, min_rev..=max_rev).prefix("$").text("max"))
                .changed();
            if lo_changed || hi_changed {
                state.set_revenue_range(lo, hi);
            }
            ui.separator();

            // ---- Year checkboxes ----
            let n_selected = state.predicate.years.len();
            let n_total = all_years.len();
            let header_text = format!("Year  ({n_selected}/{n_total})");

            egui::CollapsingHeader::new(RichText::new(header_text).strong())
                .id_salt("year_filter")
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    ui.horizontal(|ui: &mut Ui| {
                        if ui.small_button("All").clicked() {
                            state.select_all_years();
                        }
                        if ui.small_button("None").clicked() {
                            state.select_no_years();
                        }
                    });

                    for year in &all_years {
                        let mut checked = state.predicate.years.contains(year);
                        let mut text = RichText::new(year);
                        if let Some(colors) = &state.year_colors {
                            text = text.color(colors.color_for(year));
                        }
                        if ui.checkbox(&mut checked, text).changed() {
                            state.toggle_year(year);
                        }
                    }
                });
            ui.separator();

            if ui.button("Reset filters").clicked() {
                state.reset_filters();
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} hospital records, {} in filter",
                ds.len(),
                state.visible_rows.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Summary cards
// ---------------------------------------------------------------------------

/// Render the three whole-dataset summary cards.
pub fn summary_strip(ui: &mut Ui, state: &AppState) {
    let Some(summary) = &state.summary else {
        return;
    };

    ui.horizontal(|ui: &mut Ui| {
        stat_card(ui, "Hospitals", summary.row_count.to_string());
        stat_card(
            ui,
            "Avg Operating Revenue",
            summary
                .mean_revenue
                .map(format_currency)
                .unwrap_or_else(|| "no data".to_string()),
        );
        stat_card(
            ui,
            "Avg Operating Margin",
            summary
                .mean_margin
                .map(|m| format!("{:.2}%", m * 100.0))
                .unwrap_or_else(|| "no data".to_string()),
        );
    });
}

fn stat_card(ui: &mut Ui, label: &str, value: String) {
    ui.group(|ui: &mut Ui| {
        ui.vertical(|ui: &mut Ui| {
            ui.label(label);
            ui.heading(value);
        });
    });
}

/// `1234567.8` → `"$1,234,568"`.
fn format_currency(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if rounded < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open hospital utilization data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_csv(&path) {
            Ok(raw) => {
                let dataset = crate::data::clean::clean_dataset(&raw);
                log::info!(
                    "Loaded {} hospital records with columns {:?}",
                    dataset.len(),
                    dataset.columns
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
