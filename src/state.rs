use crate::color::YearColors;
use crate::data::filter::{filtered_indices, FilterPredicate};
use crate::data::model::HospitalDataset;
use crate::data::summary::{summarize, DatasetSummary};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The dataset is read-only once set; every predicate mutation goes
/// through a method here that re-runs the filter immediately, so
/// `visible_rows` always reflects the current predicate.
pub struct AppState {
    /// Cleaned dataset (None until a file has been loaded).
    pub dataset: Option<HospitalDataset>,

    /// Active filter predicate.
    pub predicate: FilterPredicate,

    /// Predicate captured right after load; what the reset control restores.
    pub default_predicate: FilterPredicate,

    /// Indices of rows passing the current predicate, in dataset order.
    pub visible_rows: Vec<usize>,

    /// Whole-dataset summary, computed once per load.
    pub summary: Option<DatasetSummary>,

    /// Colour per distinct year for the scatter series.
    pub year_colors: Option<YearColors>,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            predicate: FilterPredicate::default(),
            default_predicate: FilterPredicate::default(),
            visible_rows: Vec::new(),
            summary: None,
            year_colors: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly cleaned dataset: capture the default predicate,
    /// start from it, and compute the summary and year colours.
    pub fn set_dataset(&mut self, dataset: HospitalDataset) {
        self.default_predicate = FilterPredicate::defaults(&dataset);
        self.predicate = self.default_predicate.clone();
        self.summary = Some(summarize(&dataset));
        self.year_colors = Some(YearColors::new(&self.default_predicate.years));
        self.dataset = Some(dataset);
        self.status_message = None;
        self.refilter();
    }

    /// Recompute `visible_rows` from the current predicate.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible_rows = filtered_indices(ds, &self.predicate);
        }
    }

    /// Set the revenue interval, swapping crossed bounds so lo <= hi.
    pub fn set_revenue_range(&mut self, lo: f64, hi: f64) {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        self.predicate.revenue_lo = lo;
        self.predicate.revenue_hi = hi;
        self.refilter();
    }

    /// Toggle a single year in the predicate.
    pub fn toggle_year(&mut self, year: &str) {
        if !self.predicate.years.remove(year) {
            self.predicate.years.insert(year.to_string());
        }
        self.refilter();
    }

    /// Select every year observed in the dataset.
    pub fn select_all_years(&mut self) {
        self.predicate.years = self.default_predicate.years.clone();
        self.refilter();
    }

    /// Deselect every year.
    pub fn select_no_years(&mut self) {
        self.predicate.years.clear();
        self.refilter();
    }

    /// Restore the predicate captured at load time.
    pub fn reset_filters(&mut self) {
        self.predicate = self.default_predicate.clone();
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::data::model::{CellValue, COL_REVENUE, COL_YEAR};

    fn dataset() -> HospitalDataset {
        let record = |year: i64, rev: f64| {
            BTreeMap::from([
                (COL_YEAR.to_string(), CellValue::Integer(year)),
                (COL_REVENUE.to_string(), CellValue::Float(rev)),
            ])
        };
        HospitalDataset::new(
            vec![COL_YEAR.to_string(), COL_REVENUE.to_string()],
            vec![record(2021, 100.0), record(2022, 500.0), record(2022, 300.0)],
        )
    }

    #[test]
    fn set_dataset_starts_from_the_full_range_predicate() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        assert_eq!(state.predicate, state.default_predicate);
        assert_eq!(state.visible_rows, vec![0, 1, 2]);
        assert_eq!(state.summary.as_ref().map(|s| s.row_count), Some(3));
    }

    #[test]
    fn mutations_refilter_immediately() {
        let mut state = AppState::default();
        state.set_dataset(dataset());

        state.toggle_year("2021");
        assert_eq!(state.visible_rows, vec![1, 2]);

        state.set_revenue_range(400.0, 600.0);
        assert_eq!(state.visible_rows, vec![1]);

        state.select_no_years();
        assert!(state.visible_rows.is_empty());

        state.select_all_years();
        assert_eq!(state.visible_rows, vec![1]);
    }

    #[test]
    fn crossed_slider_bounds_are_swapped() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        state.set_revenue_range(500.0, 100.0);
        assert_eq!(state.predicate.revenue_lo, 100.0);
        assert_eq!(state.predicate.revenue_hi, 500.0);
    }

    #[test]
    fn reset_restores_the_load_time_predicate() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        let initial = state.predicate.clone();

        state.toggle_year("2021");
        state.toggle_year("2022");
        state.set_revenue_range(200.0, 250.0);
        assert_ne!(state.predicate, initial);

        state.reset_filters();
        assert_eq!(state.predicate, initial);
        assert_eq!(state.visible_rows, vec![0, 1, 2]);
    }
}
