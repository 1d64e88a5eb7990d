pub mod mapping;
pub mod record;

pub use mapping::{FieldMapping, MapEntry, Row};
pub use record::{MappingPatch, MappingRecord};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_with_camel_case_timestamps() {
        let mut schema = FieldMapping::new();
        schema.set("first_name", "Name");
        let record = MappingRecord {
            id: "abc123".to_string(),
            name: "Inventory import".to_string(),
            schema,
            created_at: "2024-01-15T10:00:00Z".parse().expect("parse timestamp"),
            updated_at: "2024-01-16T10:00:00Z".parse().expect("parse timestamp"),
        };
        let json = serde_json::to_value(&record).expect("serialize record");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert_eq!(json["schema"]["first_name"], "Name");

        let round: MappingRecord = serde_json::from_value(json).expect("deserialize record");
        assert_eq!(round, record);
    }
}
