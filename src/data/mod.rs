/// Data layer: core types, loading, cleaning, filtering, and summaries.
///
/// Architecture:
/// ```text
///      .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → raw HospitalDataset (all text)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  clean    │  strip $ % , + per-column numeric coercion
///   └──────────┘
///        │
///        ├──────────────────┐
///        ▼                  ▼
///   ┌──────────┐      ┌──────────┐
///   │  filter   │      │ summary   │
///   │ year set +│      │ row count │
///   │ rev range │      │ + means   │
///   └──────────┘      └──────────┘
/// ```

pub mod clean;
pub mod filter;
pub mod loader;
pub mod model;
pub mod summary;
