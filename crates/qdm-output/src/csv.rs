//! CSV rendering for flat records.

use serde_json::Value;

use qdm_model::Row;

/// Render rows as CSV text.
///
/// The header line is the key order of the first row; later rows are assumed
/// to share that shape and missing keys render as empty cells. Returns the
/// empty string for an empty row set; an empty body still yields just the
/// header line. Lines are joined with `\n` and no trailing newline is added.
pub fn to_csv(rows: &[Row]) -> String {
    let Some(first) = rows.first() else {
        return String::new();
    };
    let headers: Vec<&String> = first.keys().collect();

    let header_line = headers
        .iter()
        .map(|h| escape_cell(h))
        .collect::<Vec<_>>()
        .join(",");
    let body = rows
        .iter()
        .map(|row| {
            headers
                .iter()
                .map(|h| escape_cell(&cell_text(row.get(h.as_str()))))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n");

    [header_line, body]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Natural text rendering of a cell value: nulls become empty, strings render
/// bare, everything else uses its JSON text.
fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Quote-and-double a cell when it contains a comma, double quote or newline.
fn escape_cell(cell: &str) -> String {
    if cell.contains([',', '"', '\n']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}
