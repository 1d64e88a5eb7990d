//! Forward and reverse application of a mapping to row data.

use serde_json::Value;
use tracing::debug;

use qdm_model::{FieldMapping, Row};

/// Transform source-shaped rows into target-shaped rows.
///
/// Each output row holds `target = row[source]` for every pair in `mapping`,
/// in mapping entry order. Source fields not named by the mapping are
/// dropped; a source field absent from a row yields `Null`. When two sources
/// share a target the later pair wins, with the target keeping the position
/// of its first occurrence. Always produces one output row per input row.
pub fn apply(mapping: &FieldMapping, rows: &[Row]) -> Vec<Row> {
    debug!(fields = mapping.len(), rows = rows.len(), "applying mapping");
    rows.iter()
        .map(|row| {
            let mut out = Row::new();
            for (source, target) in mapping.iter() {
                let value = row.get(source).cloned().unwrap_or(Value::Null);
                out.insert(target.to_string(), value);
            }
            out
        })
        .collect()
}

/// Transform target-shaped rows back into source-shaped rows.
///
/// Uses [`FieldMapping::inverse`]: for every `(target, source)` pair the
/// output row holds `source = row[target]`. Targets absent from a row yield
/// `Null`; fields the mapping never covered are not recoverable. One output
/// row per input row.
pub fn apply_reverse(mapping: &FieldMapping, rows: &[Row]) -> Vec<Row> {
    let inverse = mapping.inverse();
    debug!(
        fields = inverse.len(),
        rows = rows.len(),
        "applying inverse mapping"
    );
    rows.iter()
        .map(|row| {
            let mut out = Row::new();
            for (target, source) in &inverse {
                let value = row.get(target).cloned().unwrap_or(Value::Null);
                out.insert(source.clone(), value);
            }
            out
        })
        .collect()
}
