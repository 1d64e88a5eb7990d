//! Mapping store: CRUD over the persisted record list.
//!
//! Every operation that reads also re-persists the normalized form, so legacy
//! or hand-edited blobs are repaired exactly once and stay stable afterwards.
//! Repair never changes an existing record's `id` or unrelated fields.

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::{debug, warn};
use uuid::Uuid;

use qdm_model::{FieldMapping, MappingPatch, MappingRecord};

use crate::backend::StorageBackend;
use crate::error::{Result, StoreError};

/// Persisted collection of named mapping configurations.
///
/// The whole collection lives in one JSON blob supplied by the backend.
/// Listing order is descending by `updated_at` (most recently touched first).
#[derive(Debug)]
pub struct MappingStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> MappingStore<B> {
    /// Create a store over the given backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Read, normalize, re-persist and return all records.
    ///
    /// A blob that is not valid JSON, or whose top level is not an array, is
    /// treated as an empty list; the next write replaces it with a normalized
    /// array. Entries missing `id`, `name`, `schema` or timestamps are
    /// backfilled (fresh id, positional `"Mapping {n}"` name, the raw object
    /// itself as schema for the legacy schema-less form, current time).
    pub fn list(&self) -> Result<Vec<MappingRecord>> {
        let mut records = self.read_normalized()?;
        self.persist(&records)?;
        records.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(records)
    }

    /// Save a new mapping under `name`, or a positional default name when
    /// `name` is empty. Returns the created record.
    pub fn create(&self, name: &str, schema: FieldMapping) -> Result<MappingRecord> {
        let existing = self.list()?;
        let name = if name.trim().is_empty() {
            format!("Mapping {}", existing.len() + 1)
        } else {
            name.to_string()
        };
        let now = Utc::now();
        let record = MappingRecord {
            id: Uuid::new_v4().to_string(),
            name,
            schema,
            created_at: now,
            updated_at: now,
        };
        let mut records = vec![record.clone()];
        records.extend(existing);
        self.persist(&records)?;
        debug!(id = %record.id, name = %record.name, "created mapping");
        Ok(record)
    }

    /// Record with the given id, or `None` when unknown.
    pub fn get(&self, id: &str) -> Result<Option<MappingRecord>> {
        Ok(self.list()?.into_iter().find(|r| r.id == id))
    }

    /// Merge `patch` into the matching record, refreshing `updated_at`.
    ///
    /// Returns the updated record, or `None` when the id is unknown (the
    /// store is still re-persisted in normalized form).
    pub fn update(&self, id: &str, patch: &MappingPatch) -> Result<Option<MappingRecord>> {
        let mut records = self.list()?;
        let mut updated = None;
        for record in &mut records {
            if record.id == id {
                if let Some(name) = &patch.name {
                    record.name.clone_from(name);
                }
                if let Some(schema) = &patch.schema {
                    record.schema = schema.clone();
                }
                record.updated_at = Utc::now();
                updated = Some(record.clone());
            }
        }
        self.persist(&records)?;
        Ok(updated)
    }

    /// Remove the record with the given id. Succeeds even when the id is
    /// unknown.
    pub fn delete(&self, id: &str) -> Result<()> {
        let mut records = self.list()?;
        records.retain(|r| r.id != id);
        self.persist(&records)?;
        Ok(())
    }

    /// Empty the store.
    pub fn clear(&self) -> Result<()> {
        self.persist(&[])
    }

    fn read_normalized(&self) -> Result<Vec<MappingRecord>> {
        let blob = self.backend.read()?;
        let raw = match blob.as_deref() {
            None | Some("") => Vec::new(),
            Some(text) => match serde_json::from_str::<Value>(text) {
                Ok(Value::Array(entries)) => entries,
                Ok(_) => {
                    warn!("persisted mapping blob is not an array; starting empty");
                    Vec::new()
                }
                Err(error) => {
                    warn!(%error, "persisted mapping blob is not valid JSON; starting empty");
                    Vec::new()
                }
            },
        };
        Ok(raw
            .into_iter()
            .enumerate()
            .map(|(idx, entry)| normalize_entry(entry, idx))
            .collect())
    }

    fn persist(&self, records: &[MappingRecord]) -> Result<()> {
        let blob = serde_json::to_string(records).map_err(StoreError::Serialize)?;
        self.backend.write(&blob)
    }
}

/// Normalize one raw persisted entry into a well-formed record.
fn normalize_entry(entry: Value, idx: usize) -> MappingRecord {
    let now = Utc::now();
    let Value::Object(obj) = entry else {
        // Not even an object: nothing to salvage beyond a placeholder.
        return MappingRecord {
            id: Uuid::new_v4().to_string(),
            name: format!("Mapping {}", idx + 1),
            schema: FieldMapping::new(),
            created_at: now,
            updated_at: now,
        };
    };

    let id = match obj.get("id").and_then(Value::as_str) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => Uuid::new_v4().to_string(),
    };
    let name = match obj.get("name").and_then(Value::as_str) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("Mapping {}", idx + 1),
    };
    // Legacy entries were bare schema objects; absent an explicit `schema`
    // key, the object itself is the schema.
    let schema = match obj.get("schema") {
        Some(value) => schema_from_value(value),
        None => schema_from_value(&Value::Object(obj.clone())),
    };
    let created_at = timestamp_or(&obj, "createdAt", now);
    let updated_at = timestamp_or(&obj, "updatedAt", now);

    MappingRecord {
        id,
        name,
        schema,
        created_at,
        updated_at,
    }
}

/// Build a schema from a raw JSON value, keeping string-valued pairs only.
fn schema_from_value(value: &Value) -> FieldMapping {
    match value {
        Value::Object(obj) => obj
            .iter()
            .filter_map(|(source, target)| {
                target
                    .as_str()
                    .map(|t| (source.clone(), t.to_string()))
            })
            .collect(),
        _ => FieldMapping::new(),
    }
}

fn timestamp_or(
    obj: &serde_json::Map<String, Value>,
    key: &str,
    fallback: DateTime<Utc>,
) -> DateTime<Utc> {
    obj.get(key)
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<DateTime<Utc>>().ok())
        .unwrap_or(fallback)
}
