//! Stored record types.

use std::collections::BTreeMap;

use serde::Serialize;

use super::EntityKind;

/// Field name to value mapping, as held in a record hash.
pub type Fields = BTreeMap<String, String>;

/// A record read back from the keyspace together with its id.
///
/// Serializes flat: `{"id": 3, "name": "...", ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredRecord {
    /// The record's numeric id.
    pub id: u64,

    /// The stored fields.
    #[serde(flatten)]
    pub fields: Fields,
}

impl StoredRecord {
    /// Creates a record from its id and fields.
    pub fn new(id: u64, fields: Fields) -> Self {
        Self { id, fields }
    }

    /// Returns the value of a field, if stored.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }
}

/// The outcome of a successful create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedRecord {
    /// The kind of record created.
    pub kind: EntityKind,
    /// The id assigned to the record.
    pub id: u64,
    /// Text naming the record in the confirmation message.
    pub display: String,
}

impl CreatedRecord {
    /// Returns the confirmation message sent back to the client.
    pub fn message(&self) -> String {
        format!("OK: ID {} for {}", self.id, self.display)
    }
}

/// The outcome of a successful doctor-patient link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedLink {
    /// The doctor id as submitted.
    pub doctor_id: String,
    /// The patient id as submitted.
    pub patient_id: String,
    /// Whether the link was new; linking twice leaves a single membership.
    pub newly_linked: bool,
}

impl CreatedLink {
    /// Returns the confirmation message sent back to the client.
    pub fn message(&self) -> String {
        format!(
            "OK: doctor ID: {}, patient ID: {}",
            self.doctor_id, self.patient_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_record_message() {
        let created = CreatedRecord {
            kind: EntityKind::Diagnosis,
            id: 4,
            display: "patient Jones".to_string(),
        };
        assert_eq!(created.message(), "OK: ID 4 for patient Jones");
    }

    #[test]
    fn test_created_link_message() {
        let link = CreatedLink {
            doctor_id: "0".to_string(),
            patient_id: "0".to_string(),
            newly_linked: true,
        };
        assert_eq!(link.message(), "OK: doctor ID: 0, patient ID: 0");
    }

    #[test]
    fn test_stored_record_field_access() {
        let mut fields = Fields::new();
        fields.insert("name".to_string(), "St. Mary".to_string());
        let record = StoredRecord::new(1, fields);

        assert_eq!(record.get("name"), Some("St. Mary"));
        assert_eq!(record.get("address"), None);
    }
}
