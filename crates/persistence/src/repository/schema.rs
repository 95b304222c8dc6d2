//! Declarative entity schemas.
//!
//! Each [`EntityKind`] is described by one static [`EntitySchema`]: which
//! form fields are stored, which are required, which values are allowed,
//! which other record must exist, and how the record is named in the
//! confirmation message. The repository is written once against this
//! description.

use std::collections::HashMap;

use crate::error::ValidationError;
use crate::types::{EntityKind, Fields};

/// Describes how one kind of record is validated, stored and named.
#[derive(Debug)]
pub struct EntitySchema {
    /// The kind described.
    pub kind: EntityKind,
    /// Every stored field, in write order.
    pub fields: &'static [&'static str],
    /// Fields that must be present and non-empty.
    pub required: &'static [&'static str],
    /// Message returned when a required field is missing.
    pub missing_message: &'static str,
    /// Enumerated-value constraints.
    pub constraints: &'static [FieldConstraint],
    /// Record that must exist before this one can be created.
    pub reference: Option<ReferenceCheck>,
    /// How the created record is named in the confirmation message.
    pub display: DisplayRule,
}

/// Restricts a field to a fixed set of values.
#[derive(Debug)]
pub struct FieldConstraint {
    /// The constrained field.
    pub field: &'static str,
    /// Accepted values (exact match).
    pub allowed: &'static [&'static str],
    /// Message returned on any other value.
    pub message: &'static str,
}

/// Requires the record named by a field to exist.
#[derive(Debug)]
pub struct ReferenceCheck {
    /// The field holding the referenced id.
    pub field: &'static str,
    /// The kind of the referenced record.
    pub target: EntityKind,
    /// When the check applies.
    pub policy: ReferencePolicy,
    /// Message returned when the referenced record does not exist.
    pub message: &'static str,
}

/// When a [`ReferenceCheck`] applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferencePolicy {
    /// The reference is always checked.
    Always,
    /// The reference is checked only when the field is non-empty.
    WhenPresent,
}

/// How a created record is named in the confirmation message.
#[derive(Debug)]
pub enum DisplayRule {
    /// The value of one of the submitted fields.
    Field(&'static str),
    /// A field of the referenced record, prefixed with a label.
    Referenced {
        /// Text placed before the value.
        label: &'static str,
        /// Field read from the referenced record.
        field: &'static str,
        /// Used when the referenced record lacks the field.
        fallback: &'static str,
    },
}

static HOSPITAL: EntitySchema = EntitySchema {
    kind: EntityKind::Hospital,
    fields: &["name", "address", "phone", "beds_number"],
    required: &["name", "address"],
    missing_message: "Hospital name and address required",
    constraints: &[],
    reference: None,
    display: DisplayRule::Field("name"),
};

static DOCTOR: EntitySchema = EntitySchema {
    kind: EntityKind::Doctor,
    fields: &["surname", "profession", "hospital_ID"],
    required: &["surname", "profession"],
    missing_message: "Surname and profession required",
    constraints: &[],
    reference: Some(ReferenceCheck {
        field: "hospital_ID",
        target: EntityKind::Hospital,
        policy: ReferencePolicy::WhenPresent,
        message: "No hospital with such ID",
    }),
    display: DisplayRule::Field("surname"),
};

static PATIENT: EntitySchema = EntitySchema {
    kind: EntityKind::Patient,
    fields: &["surname", "born_date", "sex", "mpn"],
    required: &["surname", "born_date", "sex", "mpn"],
    missing_message: "All fields required",
    constraints: &[FieldConstraint {
        field: "sex",
        allowed: &["M", "F"],
        message: "Sex must be 'M' or 'F'",
    }],
    reference: None,
    display: DisplayRule::Field("surname"),
};

// The misspelling is the wording clients already match on.
static DIAGNOSIS: EntitySchema = EntitySchema {
    kind: EntityKind::Diagnosis,
    fields: &["patient_ID", "type", "information"],
    required: &["patient_ID", "type"],
    missing_message: "Patiend ID and diagnosis type required",
    constraints: &[],
    reference: Some(ReferenceCheck {
        field: "patient_ID",
        target: EntityKind::Patient,
        policy: ReferencePolicy::Always,
        message: "No patient with such ID",
    }),
    display: DisplayRule::Referenced {
        label: "patient",
        field: "surname",
        fallback: "Unknown",
    },
};

impl EntityKind {
    /// Returns the schema describing this kind.
    pub fn schema(&self) -> &'static EntitySchema {
        match self {
            EntityKind::Hospital => &HOSPITAL,
            EntityKind::Doctor => &DOCTOR,
            EntityKind::Patient => &PATIENT,
            EntityKind::Diagnosis => &DIAGNOSIS,
        }
    }
}

/// Returns a submitted field, or the empty string when absent.
pub fn field_value<'a>(form: &'a HashMap<String, String>, field: &str) -> &'a str {
    form.get(field).map(String::as_str).unwrap_or("")
}

impl EntitySchema {
    /// Checks required fields and enumerated values.
    ///
    /// This never touches the store; reference checks happen in the
    /// repository.
    pub fn validate_form(&self, form: &HashMap<String, String>) -> Result<(), ValidationError> {
        if self
            .required
            .iter()
            .any(|field| field_value(form, field).is_empty())
        {
            return Err(ValidationError::MissingRequiredFields {
                entity: self.kind,
                message: self.missing_message.to_string(),
            });
        }

        for constraint in self.constraints {
            let value = field_value(form, constraint.field);
            if !constraint.allowed.iter().any(|allowed| *allowed == value) {
                return Err(ValidationError::InvalidValue {
                    field: constraint.field.to_string(),
                    value: value.to_string(),
                    message: constraint.message.to_string(),
                });
            }
        }

        Ok(())
    }
}

impl DisplayRule {
    /// Renders the name used in the confirmation message.
    pub fn render(&self, form: &HashMap<String, String>, referenced: Option<&Fields>) -> String {
        match self {
            DisplayRule::Field(field) => field_value(form, field).to_string(),
            DisplayRule::Referenced {
                label,
                field,
                fallback,
            } => {
                let value = referenced
                    .and_then(|fields| fields.get(*field))
                    .map(String::as_str)
                    .unwrap_or(*fallback);
                format!("{} {}", label, value)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_every_kind_has_a_matching_schema() {
        for kind in EntityKind::ALL {
            let schema = kind.schema();
            assert_eq!(schema.kind, kind);
            for field in schema.required {
                assert!(schema.fields.contains(field), "{} not stored", field);
            }
        }
    }

    #[test]
    fn test_missing_required_field() {
        let err = EntityKind::Hospital
            .schema()
            .validate_form(&form(&[("name", "St. Mary")]))
            .unwrap_err();
        assert_eq!(err.message(), "Hospital name and address required");
    }

    #[test]
    fn test_empty_required_field_counts_as_missing() {
        let err = EntityKind::Doctor
            .schema()
            .validate_form(&form(&[("surname", ""), ("profession", "Surgeon")]))
            .unwrap_err();
        assert_eq!(err.message(), "Surname and profession required");
    }

    #[test]
    fn test_optional_fields_may_be_absent() {
        assert!(
            EntityKind::Doctor
                .schema()
                .validate_form(&form(&[("surname", "Smith"), ("profession", "Surgeon")]))
                .is_ok()
        );
    }

    #[test]
    fn test_sex_constraint() {
        let schema = EntityKind::Patient.schema();
        let mut patient = form(&[
            ("surname", "Doe"),
            ("born_date", "1990-01-01"),
            ("sex", "X"),
            ("mpn", "123"),
        ]);
        let err = schema.validate_form(&patient).unwrap_err();
        assert_eq!(err.message(), "Sex must be 'M' or 'F'");

        patient.insert("sex".to_string(), "F".to_string());
        assert!(schema.validate_form(&patient).is_ok());
    }

    #[test]
    fn test_missing_fields_reported_before_constraints() {
        let err = EntityKind::Patient
            .schema()
            .validate_form(&form(&[("sex", "X")]))
            .unwrap_err();
        assert_eq!(err.message(), "All fields required");
    }

    #[test]
    fn test_display_rules() {
        let submitted = form(&[("surname", "Smith")]);
        assert_eq!(DisplayRule::Field("surname").render(&submitted, None), "Smith");

        let rule = &EntityKind::Diagnosis.schema().display;
        let mut patient = Fields::new();
        patient.insert("surname".to_string(), "Jones".to_string());
        assert_eq!(rule.render(&submitted, Some(&patient)), "patient Jones");
        assert_eq!(rule.render(&submitted, Some(&Fields::new())), "patient Unknown");
    }
}
