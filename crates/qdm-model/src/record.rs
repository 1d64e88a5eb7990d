//! Persisted mapping records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::mapping::FieldMapping;

/// A named, saved mapping configuration.
///
/// The persisted form uses camelCase timestamp keys (`createdAt`,
/// `updatedAt`) serialized as ISO-8601 strings. `id` is opaque, unique and
/// immutable; `updated_at` is refreshed on every store update and is never
/// earlier than `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingRecord {
    pub id: String,
    pub name: String,
    pub schema: FieldMapping,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update applied to a saved record.
///
/// `id` and `created_at` are immutable; fields left as `None` are untouched.
#[derive(Debug, Clone, Default)]
pub struct MappingPatch {
    pub name: Option<String>,
    pub schema: Option<FieldMapping>,
}

impl MappingPatch {
    /// Patch that replaces only the record name.
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            schema: None,
        }
    }

    /// Patch that replaces only the schema.
    pub fn reschema(schema: FieldMapping) -> Self {
        Self {
            name: None,
            schema: Some(schema),
        }
    }
}
