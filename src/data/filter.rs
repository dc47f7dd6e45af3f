use std::collections::BTreeSet;

use super::model::{CellValue, HospitalDataset, COL_REVENUE, COL_YEAR};

// ---------------------------------------------------------------------------
// Filter predicate: selected years + revenue interval
// ---------------------------------------------------------------------------

/// The combination of selected years and revenue interval currently
/// applied as a filter. `revenue_lo <= revenue_hi` always holds; the
/// state layer normalizes crossed slider bounds before storing them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterPredicate {
    /// Accepted year values, compared as text after stringification.
    pub years: BTreeSet<String>,
    /// Closed revenue interval, inclusive on both ends.
    pub revenue_lo: f64,
    pub revenue_hi: f64,
}

impl FilterPredicate {
    /// The full-range predicate for a dataset: every observed year
    /// selected, revenue bounds at the observed min/max. This is what the
    /// reset control restores, so it must be computed once at load time
    /// and kept.
    pub fn defaults(dataset: &HospitalDataset) -> Self {
        let years = dataset.distinct_values(COL_YEAR);
        let (revenue_lo, revenue_hi) =
            dataset.numeric_range(COL_REVENUE).unwrap_or((0.0, 0.0));
        FilterPredicate {
            years,
            revenue_lo,
            revenue_hi,
        }
    }
}

/// Return indices of rows that pass the predicate, in dataset order.
///
/// A row passes when its stringified `Year` is one of the selected years
/// and its `Total Operating Rev` lies inside the closed revenue interval.
/// Rows with a missing year or a non-numeric revenue never match. An
/// empty result is a valid state for the caller to display, not an error.
pub fn filtered_indices(dataset: &HospitalDataset, predicate: &FilterPredicate) -> Vec<usize> {
    dataset
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            let year_ok = row
                .get(COL_YEAR)
                .filter(|v| !v.is_missing())
                .map(|v| predicate.years.contains(&v.to_string()))
                .unwrap_or(false);

            let revenue_ok = row
                .get(COL_REVENUE)
                .and_then(CellValue::as_f64)
                .map(|rev| predicate.revenue_lo <= rev && rev <= predicate.revenue_hi)
                .unwrap_or(false);

            year_ok && revenue_ok
        })
        .map(|(i, _)| i)
        .collect()
}
