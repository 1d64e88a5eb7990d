//! Target field vocabulary: fixed base list plus session-only additions.

/// Target fields offered by default when no mapping is loaded.
pub const DEFAULT_TARGET_FIELDS: [&str; 4] = ["Name", "SKU", "Quantity", "Location"];

/// Candidate target names presented while a mapping is being edited.
///
/// Session additions are not persisted; they exist for the lifetime of the
/// editing session and survive only inside a mapping's schema if a source
/// field actually gets mapped to them.
#[derive(Debug, Clone)]
pub struct TargetVocabulary {
    base: Vec<String>,
    session: Vec<String>,
}

impl TargetVocabulary {
    /// Vocabulary over a custom base list.
    pub fn new(base: Vec<String>) -> Self {
        Self {
            base,
            session: Vec::new(),
        }
    }

    /// Session additions, newest first.
    pub fn session_fields(&self) -> &[String] {
        &self.session
    }

    /// Merged candidate list: session additions (newest first) ahead of the
    /// base fields in declared order, deduplicated keeping first occurrence.
    pub fn merged(&self) -> Vec<String> {
        let mut merged: Vec<String> = Vec::with_capacity(self.session.len() + self.base.len());
        for field in self.session.iter().chain(self.base.iter()) {
            if !merged.contains(field) {
                merged.push(field.clone());
            }
        }
        merged
    }

    /// Add a session-scoped target name.
    ///
    /// The candidate is trimmed; empty candidates and exact-match duplicates
    /// of the merged vocabulary are ignored. Returns whether it was added.
    pub fn add_session_field(&mut self, candidate: &str) -> bool {
        let value = candidate.trim();
        if value.is_empty() || self.merged().iter().any(|f| f == value) {
            return false;
        }
        self.session.insert(0, value.to_string());
        true
    }
}

impl Default for TargetVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_FIELDS.map(String::from).to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merged_puts_session_fields_first() {
        let mut vocab = TargetVocabulary::default();
        assert!(vocab.add_session_field("Warehouse"));
        assert!(vocab.add_session_field("Aisle"));

        assert_eq!(
            vocab.merged(),
            vec!["Aisle", "Warehouse", "Name", "SKU", "Quantity", "Location"]
        );
    }

    #[test]
    fn blank_candidate_is_ignored() {
        let mut vocab = TargetVocabulary::default();
        assert!(!vocab.add_session_field("  "));
        assert!(vocab.session_fields().is_empty());
    }

    #[test]
    fn duplicate_of_base_field_is_ignored_case_sensitively() {
        let mut vocab = TargetVocabulary::default();
        assert!(!vocab.add_session_field("SKU"));
        assert!(!vocab.add_session_field(" SKU "));
        // Different casing is a different name.
        assert!(vocab.add_session_field("sku"));
        assert_eq!(vocab.session_fields(), ["sku"]);
    }
}
