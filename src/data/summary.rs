use super::model::{HospitalDataset, COL_MARGIN, COL_REVENUE};

// ---------------------------------------------------------------------------
// Whole-dataset summary statistics
// ---------------------------------------------------------------------------

/// Scalar summary of the full dataset, independent of the active filter.
/// The means are `None` when the column holds no numeric values, so the
/// UI can say "no data" instead of showing a silent zero.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    pub row_count: usize,
    /// Mean of `Total Operating Rev`, missing cells ignored.
    pub mean_revenue: Option<f64>,
    /// Mean of `Operating Margin` as a raw fraction; the presentation
    /// layer formats it as a percentage.
    pub mean_margin: Option<f64>,
}

/// Compute the summary for a cleaned dataset.
pub fn summarize(dataset: &HospitalDataset) -> DatasetSummary {
    DatasetSummary {
        row_count: dataset.len(),
        mean_revenue: mean(&dataset.numeric_values(COL_REVENUE)),
        mean_margin: mean(&dataset.numeric_values(COL_MARGIN)),
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::data::model::CellValue;

    fn record(rev: CellValue, margin: CellValue) -> BTreeMap<String, CellValue> {
        BTreeMap::from([
            (COL_REVENUE.to_string(), rev),
            (COL_MARGIN.to_string(), margin),
        ])
    }

    #[test]
    fn means_ignore_missing_cells() {
        let dataset = HospitalDataset::new(
            vec![COL_REVENUE.to_string(), COL_MARGIN.to_string()],
            vec![
                record(CellValue::Float(100.0), CellValue::Float(0.10)),
                record(CellValue::Missing, CellValue::Float(0.20)),
                record(CellValue::Float(300.0), CellValue::Missing),
            ],
        );
        let summary = summarize(&dataset);
        assert_eq!(summary.row_count, 3);
        assert_eq!(summary.mean_revenue, Some(200.0));
        assert_eq!(summary.mean_margin, Some(0.15));
    }

    #[test]
    fn empty_numeric_column_yields_no_data() {
        let dataset = HospitalDataset::new(
            vec![COL_REVENUE.to_string(), COL_MARGIN.to_string()],
            vec![record(CellValue::Missing, CellValue::Text("n/a".to_string()))],
        );
        let summary = summarize(&dataset);
        assert_eq!(summary.row_count, 1);
        assert_eq!(summary.mean_revenue, None);
        assert_eq!(summary.mean_margin, None);
    }

    #[test]
    fn row_count_matches_dataset_length() {
        let dataset = HospitalDataset::new(
            vec![COL_REVENUE.to_string(), COL_MARGIN.to_string()],
            (0..7)
                .map(|i| record(CellValue::Integer(i), CellValue::Float(0.01 * i as f64)))
                .collect(),
        );
        assert_eq!(summarize(&dataset).row_count, dataset.len());
    }
}
