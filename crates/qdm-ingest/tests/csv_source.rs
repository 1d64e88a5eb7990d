use std::fs;
use std::path::PathBuf;

use qdm_ingest::{IngestError, read_csv};
use serde_json::json;
use tempfile::tempdir;

fn write_csv(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write CSV fixture");
    path
}

#[test]
fn reads_headers_and_string_rows() {
    let dir = tempdir().expect("tempdir");
    let path = write_csv(
        &dir,
        "inventory.csv",
        "first_name,sku_code,qty\nAda,X1,5\nGrace,X2,7\n",
    );

    let source = read_csv(&path).expect("read CSV");
    assert_eq!(source.fields, ["first_name", "sku_code", "qty"]);
    assert_eq!(source.file_label, "inventory.csv");
    assert_eq!(source.rows.len(), 2);
    assert_eq!(source.rows[0].get("first_name"), Some(&json!("Ada")));
    assert_eq!(source.rows[1].get("qty"), Some(&json!("7")));
}

#[test]
fn trims_bom_and_whitespace_from_headers() {
    let dir = tempdir().expect("tempdir");
    let path = write_csv(&dir, "bom.csv", "\u{feff}name , code\nAda,X1\n");

    let source = read_csv(&path).expect("read CSV");
    assert_eq!(source.fields, ["name", "code"]);
}

#[test]
fn skips_empty_lines_and_pads_short_rows() {
    let dir = tempdir().expect("tempdir");
    let path = write_csv(&dir, "ragged.csv", "a,b,c\n1,2,3\n\n4,5\n");

    let source = read_csv(&path).expect("read CSV");
    assert_eq!(source.rows.len(), 2);
    assert_eq!(source.rows[1].get("b"), Some(&json!("5")));
    assert_eq!(source.rows[1].get("c"), Some(&json!("")));
}

#[test]
fn quoted_cells_keep_commas() {
    let dir = tempdir().expect("tempdir");
    let path = write_csv(&dir, "quoted.csv", "a,b\n\"x,y\",z\n");

    let source = read_csv(&path).expect("read CSV");
    assert_eq!(source.rows[0].get("a"), Some(&json!("x,y")));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().expect("tempdir");
    let err = read_csv(&dir.path().join("absent.csv")).expect_err("should fail");
    assert!(matches!(err, IngestError::Io { .. }));
}
