//! JSON rendering for flat records.

use qdm_model::Row;

/// Render rows as a pretty-printed JSON array (2-space indent).
pub fn to_json(rows: &[Row]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(rows)
}
