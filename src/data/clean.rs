use std::collections::BTreeMap;

use super::model::{CellValue, HospitalDataset};

type Record = BTreeMap<String, CellValue>;

// ---------------------------------------------------------------------------
// Column cleaning: symbol stripping + per-column numeric coercion
// ---------------------------------------------------------------------------

/// Produce a cleaned copy of a raw dataset.
///
/// For every column whose non-missing cells are all textual:
/// 1. delete `$`, `%` and `,` from each cell,
/// 2. turn cells that are empty after deletion into [`CellValue::Missing`],
/// 3. coerce the whole column to integers if every remaining value parses
///    as `i64`, otherwise to floats if every value parses as `f64`,
///    otherwise leave the column textual.
///
/// The coercion is all-or-nothing per column: one unparseable cell keeps
/// the entire column textual. Columns already holding numeric values pass
/// through untouched, which makes the transform idempotent. The input is
/// never modified; row count and order are preserved.
pub fn clean_dataset(raw: &HospitalDataset) -> HospitalDataset {
    let mut rows = raw.rows.clone();

    for column in &raw.columns {
        if !is_textual_column(&rows, column) {
            continue;
        }

        // Pass 1: strip symbols, demote empty strings to Missing.
        for row in rows.iter_mut() {
            let Some(cell) = row.get_mut(column) else {
                continue;
            };
            if let CellValue::Text(s) = cell {
                let stripped = strip_symbols(s);
                *cell = if stripped.is_empty() {
                    CellValue::Missing
                } else {
                    CellValue::Text(stripped)
                };
            }
        }

        // Pass 2: try to retype the whole column.
        if let Some(coerced) = coerce_column(&rows, column) {
            for (row, value) in rows.iter_mut().zip(coerced) {
                if let Some(cell) = row.get_mut(column) {
                    *cell = value;
                }
            }
        }
    }

    HospitalDataset::new(raw.columns.clone(), rows)
}

/// Delete the currency/percent/thousands characters from a cell.
fn strip_symbols(s: &str) -> String {
    s.chars().filter(|c| !matches!(c, '$' | '%' | ',')).collect()
}

/// A column qualifies for cleaning when every non-missing cell is text.
fn is_textual_column(rows: &[Record], column: &str) -> bool {
    rows.iter()
        .filter_map(|row| row.get(column))
        .all(|cell| matches!(cell, CellValue::Text(_) | CellValue::Missing))
}

/// Attempt the all-or-nothing numeric coercion of a stripped text column.
///
/// Returns one replacement value per row (missing cells stay missing) or
/// `None` when any cell fails to parse, in which case the column must be
/// left as-is. Integer parsing is tried first so year-like columns keep
/// integral values; a single fractional cell demotes the column to floats.
fn coerce_column(rows: &[Record], column: &str) -> Option<Vec<CellValue>> {
    let texts: Vec<Option<&str>> = rows
        .iter()
        .map(|row| match row.get(column) {
            Some(CellValue::Text(s)) => Some(s.as_str()),
            _ => None,
        })
        .collect();

    if texts.iter().all(|t| t.is_none()) {
        // Nothing to retype in an all-missing column.
        return None;
    }

    let as_integers: Option<Vec<CellValue>> = texts
        .iter()
        .map(|t| match t {
            None => Some(CellValue::Missing),
            Some(s) => s.parse::<i64>().ok().map(CellValue::Integer),
        })
        .collect();
    if as_integers.is_some() {
        return as_integers;
    }

    texts
        .iter()
        .map(|t| match t {
            None => Some(CellValue::Missing),
            Some(s) => s.parse::<f64>().ok().map(CellValue::Float),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    /// Build a one-column dataset from raw text cells.
    fn text_column(name: &str, cells: &[&str]) -> HospitalDataset {
        let rows = cells
            .iter()
            .map(|c| BTreeMap::from([(name.to_string(), CellValue::Text(c.to_string()))]))
            .collect();
        HospitalDataset::new(vec![name.to_string()], rows)
    }

    fn column_values(dataset: &HospitalDataset, name: &str) -> Vec<CellValue> {
        dataset
            .rows
            .iter()
            .map(|row| row.get(name).cloned().expect("cell present"))
            .collect()
    }

    #[test]
    fn currency_column_becomes_integers_with_missing() {
        let raw = text_column("Rev", &["$1,000", "$2,500", ""]);
        let clean = clean_dataset(&raw);
        assert_eq!(
            column_values(&clean, "Rev"),
            vec![
                CellValue::Integer(1000),
                CellValue::Integer(2500),
                CellValue::Missing,
            ]
        );
    }

    #[test]
    fn fractional_cell_demotes_column_to_floats() {
        let raw = text_column("Margin", &["0.05", "12%", "3"]);
        let clean = clean_dataset(&raw);
        assert_eq!(
            column_values(&clean, "Margin"),
            vec![
                CellValue::Float(0.05),
                CellValue::Float(12.0),
                CellValue::Float(3.0),
            ]
        );
    }

    #[test]
    fn mixed_column_stays_textual_after_stripping() {
        let raw = text_column("Rev", &["$1,000", "N/A"]);
        let clean = clean_dataset(&raw);
        assert_eq!(
            column_values(&clean, "Rev"),
            vec![
                CellValue::Text("1000".to_string()),
                CellValue::Text("N/A".to_string()),
            ]
        );
    }

    #[test]
    fn symbols_only_cell_becomes_missing() {
        let raw = text_column("Rev", &["$,%", "5"]);
        let clean = clean_dataset(&raw);
        assert_eq!(
            column_values(&clean, "Rev"),
            vec![CellValue::Missing, CellValue::Integer(5)]
        );
    }

    #[test]
    fn cleaning_does_not_mutate_the_raw_input() {
        let raw = text_column("Rev", &["$1,000", ""]);
        let before = raw.clone();
        let _ = clean_dataset(&raw);
        assert_eq!(raw, before);
    }

    #[test]
    fn cleaning_is_idempotent() {
        let raw = HospitalDataset::new(
            vec!["Facility".to_string(), "Rev".to_string(), "Note".to_string()],
            vec![
                BTreeMap::from([
                    ("Facility".to_string(), CellValue::Text("Mercy General".to_string())),
                    ("Rev".to_string(), CellValue::Text("$1,000".to_string())),
                    ("Note".to_string(), CellValue::Text("audited".to_string())),
                ]),
                BTreeMap::from([
                    ("Facility".to_string(), CellValue::Text("Valley Medical".to_string())),
                    ("Rev".to_string(), CellValue::Text(String::new())),
                    ("Note".to_string(), CellValue::Text("42".to_string())),
                ]),
            ],
        );
        let once = clean_dataset(&raw);
        let twice = clean_dataset(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn row_count_and_order_are_preserved() {
        let raw = text_column("Rev", &["$3", "$1", "$2"]);
        let clean = clean_dataset(&raw);
        assert_eq!(clean.len(), raw.len());
        assert_eq!(
            column_values(&clean, "Rev"),
            vec![
                CellValue::Integer(3),
                CellValue::Integer(1),
                CellValue::Integer(2),
            ]
        );
    }
}
