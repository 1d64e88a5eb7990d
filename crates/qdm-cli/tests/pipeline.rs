//! End-to-end tests for the convert/reverse pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use qdm_cli::cli::{ConvertArgs, MappingsCommand, ReverseArgs};
use qdm_cli::commands::{run_convert, run_mappings, run_reverse};
use qdm_store::{FileBackend, MappingStore};
use serde_json::{Value, json};
use tempfile::tempdir;

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

fn convert_args(input: PathBuf, schema: PathBuf, out: PathBuf) -> ConvertArgs {
    ConvertArgs {
        input,
        mapping_id: None,
        schema: Some(schema),
        out: Some(out),
        preview: false,
        save_as: None,
    }
}

#[test]
fn convert_then_reverse_round_trips() {
    let dir = tempdir().expect("tempdir");
    let store_dir = dir.path().join("store");

    let csv = write_file(
        dir.path(),
        "inventory.csv",
        "first_name,sku_code,qty\nAda,X1,5\nGrace,X2,7\n",
    );
    let schema = write_file(
        dir.path(),
        "schema.json",
        r#"{"first_name": "Name", "sku_code": "SKU"}"#,
    );

    let json_out = dir.path().join("mapped.json");
    run_convert(
        &convert_args(csv, schema.clone(), json_out.clone()),
        &store_dir,
    )
    .expect("convert");

    let mapped: Value =
        serde_json::from_str(&fs::read_to_string(&json_out).expect("read output")).expect("json");
    assert_eq!(
        mapped,
        json!([
            {"Name": "Ada", "SKU": "X1"},
            {"Name": "Grace", "SKU": "X2"}
        ])
    );

    let csv_out = dir.path().join("restored.csv");
    run_reverse(
        &ReverseArgs {
            input: json_out,
            mapping_id: None,
            schema: Some(schema),
            out: Some(csv_out.clone()),
        },
        &store_dir,
    )
    .expect("reverse");

    let restored = fs::read_to_string(&csv_out).expect("read csv");
    assert_eq!(restored, "first_name,sku_code\nAda,X1\nGrace,X2");
}

#[test]
fn convert_save_as_persists_the_schema() {
    let dir = tempdir().expect("tempdir");
    let store_dir = dir.path().join("store");

    let csv = write_file(dir.path(), "data.csv", "a,b\n1,2\n");
    let schema = write_file(dir.path(), "schema.json", r#"{"a": "X"}"#);

    let mut args = convert_args(csv, schema, dir.path().join("out.json"));
    args.save_as = Some("My Mapping".to_string());
    run_convert(&args, &store_dir).expect("convert");

    let store = MappingStore::new(FileBackend::new(&store_dir).expect("backend"));
    let records = store.list().expect("list");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "My Mapping");
    assert_eq!(records[0].schema.target_of("a"), Some("X"));
}

#[test]
fn convert_by_saved_mapping_id() {
    let dir = tempdir().expect("tempdir");
    let store_dir = dir.path().join("store");

    let schema = write_file(dir.path(), "schema.json", r#"{"a": "X"}"#);
    run_mappings(
        &MappingsCommand::Save {
            name: "stored".to_string(),
            schema,
        },
        &store_dir,
    )
    .expect("save");

    let store = MappingStore::new(FileBackend::new(&store_dir).expect("backend"));
    let id = store.list().expect("list")[0].id.clone();

    let csv = write_file(dir.path(), "data.csv", "a,b\n1,2\n");
    let out = dir.path().join("out.json");
    run_convert(
        &ConvertArgs {
            input: csv,
            mapping_id: Some(id),
            schema: None,
            out: Some(out.clone()),
            preview: false,
            save_as: None,
        },
        &store_dir,
    )
    .expect("convert");

    let mapped: Value =
        serde_json::from_str(&fs::read_to_string(&out).expect("read output")).expect("json");
    assert_eq!(mapped, json!([{"X": "1"}]));
}

#[test]
fn reverse_rejects_invalid_json() {
    let dir = tempdir().expect("tempdir");
    let store_dir = dir.path().join("store");

    let bad = write_file(dir.path(), "bad.json", "not json");
    let schema = write_file(dir.path(), "schema.json", r#"{"a": "X"}"#);

    let err = run_reverse(
        &ReverseArgs {
            input: bad,
            mapping_id: None,
            schema: Some(schema),
            out: None,
        },
        &store_dir,
    )
    .expect_err("should reject");
    assert!(err.to_string().contains("not valid JSON"));
}

#[test]
fn convert_with_unknown_mapping_id_fails() {
    let dir = tempdir().expect("tempdir");
    let store_dir = dir.path().join("store");
    let csv = write_file(dir.path(), "data.csv", "a\n1\n");

    let err = run_convert(
        &ConvertArgs {
            input: csv,
            mapping_id: Some("missing".to_string()),
            schema: None,
            out: None,
            preview: false,
            save_as: None,
        },
        &store_dir,
    )
    .expect_err("should fail");
    assert!(err.to_string().contains("missing"));
}
