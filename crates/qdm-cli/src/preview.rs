//! Preview tables for transformed row sets.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use serde_json::Value;

use qdm_model::Row;

/// Rows shown by a preview before truncation.
pub const PREVIEW_ROW_LIMIT: usize = 20;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

/// Build a preview table of the first [`PREVIEW_ROW_LIMIT`] rows.
///
/// Headers come from the first row's key order; nulls render as empty cells.
pub fn rows_table(rows: &[Row]) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    let Some(first) = rows.first() else {
        return table;
    };
    let headers: Vec<&String> = first.keys().collect();
    table.set_header(headers.clone());
    for row in rows.iter().take(PREVIEW_ROW_LIMIT) {
        table.add_row(headers.iter().map(|h| cell_text(row.get(h.as_str()))));
    }
    table
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
