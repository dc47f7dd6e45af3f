use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};

use super::model::{CellValue, HospitalDataset, check_required_columns};

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load the raw hospital table from a CSV file.
///
/// Every cell comes back as [`CellValue::Text`] exactly as it appears in
/// the file (empty cells included); type coercion is the cleaning pass's
/// job, see [`super::clean::clean_dataset`]. The header row determines
/// column order, and the required columns are validated here so a bad
/// file fails before the dashboard starts.
pub fn load_csv(path: &Path) -> Result<HospitalDataset> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    check_required_columns(&headers)?;

    let mut rows = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let mut row = BTreeMap::new();
        for (col_idx, value) in record.iter().enumerate() {
            let Some(col_name) = headers.get(col_idx) else {
                continue;
            };
            row.insert(col_name.clone(), CellValue::Text(value.to_string()));
        }
        rows.push(row);
    }

    Ok(HospitalDataset::new(headers, rows))
}
