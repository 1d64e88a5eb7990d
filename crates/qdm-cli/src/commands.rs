//! Command implementations for the `qdm` binary.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::info;

use qdm_ingest::{parse_json_strict, read_csv};
use qdm_model::{FieldMapping, MappingPatch, MappingRecord};
use qdm_output::{to_csv, to_json};
use qdm_store::{FileBackend, MappingStore};
use qdm_transform::{TargetVocabulary, apply, apply_reverse};

use crate::cli::{ConvertArgs, MappingsCommand, ReverseArgs, TargetsArgs};
use crate::preview::{apply_table_style, rows_table};

fn open_store(store_dir: &Path) -> Result<MappingStore<FileBackend>> {
    let backend = FileBackend::new(store_dir)
        .with_context(|| format!("open mapping store at {}", store_dir.display()))?;
    Ok(MappingStore::new(backend))
}

/// Resolve the mapping to apply: a saved record by id, or a schema file.
fn resolve_schema(
    store_dir: &Path,
    mapping_id: Option<&str>,
    schema_file: Option<&Path>,
) -> Result<FieldMapping> {
    if let Some(id) = mapping_id {
        let record = open_store(store_dir)?
            .get(id)
            .context("read mapping store")?
            .with_context(|| format!("no saved mapping with id '{id}'"))?;
        return Ok(record.schema);
    }
    if let Some(path) = schema_file {
        return load_schema_file(path);
    }
    bail!("provide either --mapping-id or --schema");
}

fn load_schema_file(path: &Path) -> Result<FieldMapping> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read schema file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("parse schema file {} as a mapping object", path.display()))
}

fn write_or_print(output: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            fs::write(path, output).with_context(|| format!("write {}", path.display()))?;
            info!("wrote {}", path.display());
        }
        None => println!("{output}"),
    }
    Ok(())
}

pub fn run_convert(args: &ConvertArgs, store_dir: &Path) -> Result<()> {
    let mapping = resolve_schema(store_dir, args.mapping_id.as_deref(), args.schema.as_deref())?;
    let source = read_csv(&args.input)
        .with_context(|| format!("ingest {}", args.input.display()))?;
    info!(
        file = %source.file_label,
        rows = source.rows.len(),
        "applying mapping with {} fields",
        mapping.len()
    );

    let mapped = apply(&mapping, &source.rows);

    if let Some(name) = &args.save_as {
        let record = open_store(store_dir)?
            .create(name, mapping.clone())
            .context("save mapping")?;
        eprintln!("Saved mapping '{}' with id {}", record.name, record.id);
    }

    if args.preview {
        println!("{}", rows_table(&mapped));
        eprintln!("{} rows total", mapped.len());
        return Ok(());
    }

    let json = to_json(&mapped).context("render JSON output")?;
    write_or_print(&json, args.out.as_deref())
}

pub fn run_reverse(args: &ReverseArgs, store_dir: &Path) -> Result<()> {
    let mapping = resolve_schema(store_dir, args.mapping_id.as_deref(), args.schema.as_deref())?;
    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;
    let rows = parse_json_strict(&text)
        .with_context(|| format!("{} is not valid JSON", args.input.display()))?;
    info!(rows = rows.len(), "applying inverse mapping");

    let restored = apply_reverse(&mapping, &rows);
    let csv = to_csv(&restored);
    write_or_print(&csv, args.out.as_deref())
}

pub fn run_mappings(command: &MappingsCommand, store_dir: &Path) -> Result<()> {
    let store = open_store(store_dir)?;
    match command {
        MappingsCommand::List => {
            let records = store.list().context("list mappings")?;
            if records.is_empty() {
                println!("No saved mappings yet");
                return Ok(());
            }
            let mut table = Table::new();
            apply_table_style(&mut table);
            table.set_header(vec!["Name", "Id", "Fields", "Updated"]);
            for record in &records {
                table.add_row(vec![
                    record.name.clone(),
                    record.id.clone(),
                    record.schema.len().to_string(),
                    record.updated_at.to_rfc3339(),
                ]);
            }
            println!("{table}");
        }
        MappingsCommand::Show { id } => {
            let record = store
                .get(id)
                .context("read mapping store")?
                .with_context(|| format!("no saved mapping with id '{id}'"))?;
            print_record(&record);
        }
        MappingsCommand::Save { name, schema } => {
            let mapping = load_schema_file(schema)?;
            let record = store.create(name, mapping).context("save mapping")?;
            println!("Saved mapping '{}' with id {}", record.name, record.id);
        }
        MappingsCommand::Edit { id, name, schema } => {
            let patch = MappingPatch {
                name: name.clone(),
                schema: schema.as_deref().map(load_schema_file).transpose()?,
            };
            if patch.name.is_none() && patch.schema.is_none() {
                bail!("provide --name and/or --schema");
            }
            match store.update(id, &patch).context("update mapping")? {
                Some(record) => println!("Updated mapping '{}'", record.name),
                None => bail!("no saved mapping with id '{id}'"),
            }
        }
        MappingsCommand::Delete { id } => {
            store.delete(id).context("delete mapping")?;
            println!("Deleted mapping {id}");
        }
        MappingsCommand::Clear => {
            store.clear().context("clear mapping store")?;
            println!("Cleared all saved mappings");
        }
    }
    Ok(())
}

pub fn run_targets(args: &TargetsArgs) -> Result<()> {
    let mut vocabulary = TargetVocabulary::default();
    for candidate in &args.add {
        if !vocabulary.add_session_field(candidate) {
            eprintln!("Skipped '{}' (empty or already present)", candidate.trim());
        }
    }
    for field in vocabulary.merged() {
        println!("{field}");
    }
    Ok(())
}

fn print_record(record: &MappingRecord) {
    println!("Name:    {}", record.name);
    println!("Id:      {}", record.id);
    println!("Created: {}", record.created_at.to_rfc3339());
    println!("Updated: {}", record.updated_at.to_rfc3339());
    if record.schema.is_empty() {
        println!("Schema:  (empty)");
        return;
    }
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec!["Source", "Target"]);
    for (source, target) in record.schema.iter() {
        table.add_row(vec![source, target]);
    }
    println!("{table}");
}
