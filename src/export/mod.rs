//! Export module for persisting the day timeline.
//!
//! The CSV table is the sole contract with the downstream renderer; its
//! column order and 2-decimal formatting must stay stable.

mod csv;

pub use csv::{export_timeline_csv, write_timeline_csv, CsvExportError, CSV_COLUMNS};
