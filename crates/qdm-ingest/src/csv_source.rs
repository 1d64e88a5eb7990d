//! CSV file intake.
//!
//! Reads an uploaded CSV into header names plus string-valued rows, the shape
//! the mapping editor works on. Headers are trimmed of whitespace and a
//! leading BOM; fully empty lines are skipped.

use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use serde_json::Value;
use tracing::debug;

use qdm_model::Row;

use crate::error::{IngestError, Result};

/// A parsed CSV source: ordered header fields, row records keyed by header,
/// and a display label (the file name).
#[derive(Debug, Clone)]
pub struct CsvSource {
    pub fields: Vec<String>,
    pub rows: Vec<Row>,
    pub file_label: String,
}

/// Read a CSV file with a header line into a [`CsvSource`].
///
/// Cells are delivered as strings; rows shorter than the header are padded
/// with empty strings and extra cells beyond the header are dropped.
pub fn read_csv(path: &Path) -> Result<CsvSource> {
    let text = fs::read_to_string(path).map_err(|e| IngestError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let file_label = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();
    read_csv_text(&text, path, file_label)
}

fn read_csv_text(text: &str, path: &Path, file_label: String) -> Result<CsvSource> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let fields: Vec<String> = reader
        .headers()
        .map_err(|e| csv_error(path, e))?
        .iter()
        .map(normalize_header)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| csv_error(path, e))?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let mut row = Row::new();
        for (idx, field) in fields.iter().enumerate() {
            let cell = record.get(idx).unwrap_or("");
            row.insert(field.clone(), Value::String(cell.to_string()));
        }
        rows.push(row);
    }

    debug!(file = %file_label, fields = fields.len(), rows = rows.len(), "read CSV source");
    Ok(CsvSource {
        fields,
        rows,
        file_label,
    })
}

fn normalize_header(raw: &str) -> String {
    raw.trim_matches('\u{feff}').trim().to_string()
}

fn csv_error(path: &Path, source: csv::Error) -> IngestError {
    IngestError::Csv {
        path: path.to_path_buf(),
        source,
    }
}
