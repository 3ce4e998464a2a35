//! Normalized output records.

use serde::{Deserialize, Serialize};

/// Creator marker identifying records produced by the public catalog import.
pub const IMPORT_CREATOR: &str = "public-import";

/// The flattened, backend-ready representation of one catalog item.
///
/// Serializes to the wire shape the preset store expects: `uuid` stays empty
/// (the backend assigns one on insert) and `itemType` keeps the backend's
/// camelCase spelling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    /// Display name, including the source suffix when present
    pub name: String,

    /// Placeholder identifier, assigned by the backend
    pub uuid: String,

    /// Fully rendered, macro-free description text
    pub description: String,

    /// Price, rounded to whole units
    pub price: i32,

    /// Weight in pounds
    pub weight: f32,

    /// Import provenance marker
    pub creator: String,

    /// Resolved item-type category
    #[serde(rename = "itemType")]
    pub item_type: String,
}

impl NormalizedRecord {
    /// Create a record with the import creator marker and an empty uuid.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uuid: String::new(),
            description: String::new(),
            price: 0,
            weight: 0.0,
            creator: IMPORT_CREATOR.to_string(),
            item_type: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let mut record = NormalizedRecord::new("Dagger");
        record.item_type = "Martial weapon".to_string();
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"itemType\":\"Martial weapon\""));
        assert!(json.contains("\"uuid\":\"\""));
        assert!(json.contains("\"creator\":\"public-import\""));
    }
}
