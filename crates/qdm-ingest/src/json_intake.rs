//! JSON text intake for the reverse (JSON to CSV) path.
//!
//! Two entry points with deliberately different failure behavior: the strict
//! path rejects text that does not parse, matching the explicit file-intake
//! validation; the preview path degrades to an empty row set so a half-typed
//! paste never aborts the session.

use serde_json::Value;
use tracing::debug;

use qdm_model::Row;

use crate::error::{IngestError, Result};

/// Parse JSON text, failing on unparsable input.
///
/// A top-level value that is not an array yields an empty row set (that is a
/// shape mismatch, not an intake failure). Array elements that are not
/// objects become empty rows, keeping row count aligned with the input.
pub fn parse_json_strict(text: &str) -> Result<Vec<Row>> {
    let value: Value = serde_json::from_str(text).map_err(IngestError::InvalidJson)?;
    Ok(rows_from_value(value))
}

/// Best-effort parse for previews: unparsable text or a non-array top level
/// both yield an empty row set.
pub fn rows_from_json(text: &str) -> Vec<Row> {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => rows_from_value(value),
        Err(error) => {
            debug!(%error, "preview JSON did not parse; showing no rows");
            Vec::new()
        }
    }
}

fn rows_from_value(value: Value) -> Vec<Row> {
    let Value::Array(items) = value else {
        return Vec::new();
    };
    items
        .into_iter()
        .map(|item| match item {
            Value::Object(obj) => obj,
            _ => Row::new(),
        })
        .collect()
}
