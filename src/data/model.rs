use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Column names the dashboard depends on
// ---------------------------------------------------------------------------

pub const COL_FACILITY: &str = "Facility Name";
pub const COL_YEAR: &str = "Year";
pub const COL_REVENUE: &str = "Total Operating Rev";
pub const COL_MARGIN: &str = "Operating Margin";
pub const COL_AVAILABLE_BEDS: &str = "Available Beds";
pub const COL_STAFFED_BEDS: &str = "Staffed Beds";

/// Columns that must be present in the input file. Aggregation and
/// filtering reference these names directly, so a file without them
/// cannot drive the dashboard.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    COL_FACILITY,
    COL_YEAR,
    COL_REVENUE,
    COL_MARGIN,
    COL_AVAILABLE_BEDS,
    COL_STAFFED_BEDS,
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("required column '{0}' not found in input")]
    MissingColumn(&'static str),
}

// ---------------------------------------------------------------------------
// CellValue – a single cell of the table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value. After cleaning, every column holds a
/// single semantic type: text, integer, or float, with `Missing` standing
/// in for absent cells in any column.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Missing,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Missing => Ok(()),
        }
    }
}

impl CellValue {
    /// Try to interpret the value as an `f64` for range checks and means.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

// ---------------------------------------------------------------------------
// HospitalDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full in-memory table of hospital records for one load of the
/// source file. Immutable after construction: the cleaning pass produces
/// a new dataset rather than editing this one in place.
#[derive(Debug, Clone, PartialEq)]
pub struct HospitalDataset {
    /// Column names in source-header order (significant for display).
    pub columns: Vec<String>,
    /// Records in source-row order: column name → cell value.
    pub rows: Vec<BTreeMap<String, CellValue>>,
}

impl HospitalDataset {
    pub fn new(columns: Vec<String>, rows: Vec<BTreeMap<String, CellValue>>) -> Self {
        HospitalDataset { columns, rows }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sorted set of distinct non-missing values of a column, stringified.
    pub fn distinct_values(&self, column: &str) -> BTreeSet<String> {
        self.rows
            .iter()
            .filter_map(|row| row.get(column))
            .filter(|v| !v.is_missing())
            .map(|v| v.to_string())
            .collect()
    }

    /// All numeric values of a column, in row order, missing cells skipped.
    pub fn numeric_values(&self, column: &str) -> Vec<f64> {
        self.rows
            .iter()
            .filter_map(|row| row.get(column))
            .filter_map(CellValue::as_f64)
            .collect()
    }

    /// Observed (min, max) of a column's numeric values, `None` when the
    /// column holds no numeric values at all.
    pub fn numeric_range(&self, column: &str) -> Option<(f64, f64)> {
        let values = self.numeric_values(column);
        if values.is_empty() {
            return None;
        }
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        Some((min, max))
    }
}

/// Check that every required column is present in the given header.
pub fn check_required_columns(columns: &[String]) -> Result<(), SchemaError> {
    for required in REQUIRED_COLUMNS {
        if !columns.iter().any(|c| c == required) {
            return Err(SchemaError::MissingColumn(required));
        }
    }
    Ok(())
}
