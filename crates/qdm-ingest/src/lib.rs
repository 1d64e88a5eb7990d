//! Data intake for Quick Data Mapper.
//!
//! CSV files become `(fields, rows, file_label)` triples for the mapping
//! editor; JSON text becomes target-shaped rows for the reverse conversion
//! path, with a strict variant for file validation and a forgiving variant
//! for live previews.

mod csv_source;
mod error;
mod json_intake;

pub use csv_source::{CsvSource, read_csv};
pub use error::{IngestError, Result};
pub use json_intake::{parse_json_strict, rows_from_json};
