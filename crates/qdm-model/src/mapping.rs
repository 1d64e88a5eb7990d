//! Field mapping types for source-to-target column mapping.
//!
//! A [`FieldMapping`] associates source column names with target field names.
//! Entry order is significant: iteration follows the order in which pairs were
//! first set, and when two sources share a target the later entry wins during
//! a transform. On the wire a mapping is a JSON object `{source: target}`.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A flat record keyed by field name. Values are opaque JSON scalars; the
/// transform engine never interprets them. Key order is insertion order.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// One source-to-target assignment inside a mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapEntry {
    /// Column name in the uploaded source data.
    pub source: String,
    /// Field name in the output record shape.
    pub target: String,
}

/// An ordered association from source field name to target field name.
///
/// Sources are unique (setting an existing source replaces its target in
/// place, keeping its position). Multiple sources may map to the same target;
/// this is allowed and resolved last-entry-wins when rows are transformed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMapping {
    entries: Vec<MapEntry>,
}

impl FieldMapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of source fields mapped.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no source field is mapped.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Assign a target to a source field.
    ///
    /// An existing source keeps its position and gets the new target; a new
    /// source is appended.
    pub fn set(&mut self, source: impl Into<String>, target: impl Into<String>) {
        let source = source.into();
        let target = target.into();
        match self.entries.iter_mut().find(|e| e.source == source) {
            Some(entry) => entry.target = target,
            None => self.entries.push(MapEntry { source, target }),
        }
    }

    /// Remove the assignment for a source field, returning its target.
    pub fn remove(&mut self, source: &str) -> Option<String> {
        let idx = self.entries.iter().position(|e| e.source == source)?;
        Some(self.entries.remove(idx).target)
    }

    /// Target assigned to a source field, if any.
    pub fn target_of(&self, source: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.source == source)
            .map(|e| e.target.as_str())
    }

    /// Entries in iteration order.
    pub fn entries(&self) -> &[MapEntry] {
        &self.entries
    }

    /// Iterate `(source, target)` pairs in entry order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|e| (e.source.as_str(), e.target.as_str()))
    }

    /// Build the inverse target-to-source association.
    ///
    /// When several sources share a target the inverse keeps only the source
    /// of the later entry; the target keeps the position of its first
    /// occurrence. The loss is inherent to inverting a many-to-one mapping.
    pub fn inverse(&self) -> Vec<(String, String)> {
        let mut inverse: Vec<(String, String)> = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            match inverse.iter_mut().find(|(target, _)| target == &entry.target) {
                Some((_, source)) => source.clone_from(&entry.source),
                None => inverse.push((entry.target.clone(), entry.source.clone())),
            }
        }
        inverse
    }
}

impl FromIterator<(String, String)> for FieldMapping {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (source, target) in iter {
            mapping.set(source, target);
        }
        mapping
    }
}

impl Serialize for FieldMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.source, &entry.target)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FieldMapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MappingVisitor;

        impl<'de> Visitor<'de> for MappingVisitor {
            type Value = FieldMapping;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of source field name to target field name")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut mapping = FieldMapping::new();
                while let Some((source, target)) = access.next_entry::<String, String>()? {
                    mapping.set(source, target);
                }
                Ok(mapping)
            }
        }

        deserializer.deserialize_map(MappingVisitor)
    }
}
