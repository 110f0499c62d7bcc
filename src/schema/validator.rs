//! Record validation against schema fields
//!
//! Validation semantics:
//! - Full mode (create): the record carries exactly the declared fields
//! - Subset mode (update): the record carries any subset, possibly none
//! - Every present value matches its declared type exactly
//!
//! Check order is fixed: the size check (full mode only), then for each key
//! in document order membership followed by type. The first failure wins.

use thiserror::Error;

use super::types::{Record, SchemaFields};

/// Field-set strictness
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Exact field-set match
    Full,
    /// Any subset of the declared fields
    Subset,
}

/// Why a record was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RecordViolation {
    #[error("missing field in record")]
    MissingField,

    #[error("redundant field in record")]
    RedundantField,

    #[error("invalid data type in record")]
    InvalidType,
}

/// Checks `record` against `fields`.
///
/// Pure: the record is not modified and nothing is recorded.
pub fn check_record(
    fields: &SchemaFields,
    record: &Record,
    mode: ValidationMode,
) -> Result<(), RecordViolation> {
    if mode == ValidationMode::Full && record.len() < fields.len() {
        return Err(RecordViolation::MissingField);
    }

    for (key, value) in record {
        let expected = fields.get(key).ok_or(RecordViolation::RedundantField)?;

        if !expected.matches(value) {
            return Err(RecordViolation::InvalidType);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{schema_fields, Entity};
    use serde_json::{json, Value};

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {}", other),
        }
    }

    fn scientist_fields() -> SchemaFields {
        schema_fields(Entity::Scientist)
    }

    #[test]
    fn test_full_record_passes() {
        let rec = record(json!({
            "name": "One",
            "madness_level": 10,
            "galaxy_destruction_attempts": 12
        }));
        assert_eq!(
            check_record(&scientist_fields(), &rec, ValidationMode::Full),
            Ok(())
        );
    }

    #[test]
    fn test_field_order_is_irrelevant() {
        let rec = record(json!({
            "galaxy_destruction_attempts": 12,
            "name": "One",
            "madness_level": 10
        }));
        assert!(check_record(&scientist_fields(), &rec, ValidationMode::Full).is_ok());
    }

    #[test]
    fn test_missing_field() {
        let rec = record(json!({"name": "One", "madness_level": 10}));
        assert_eq!(
            check_record(&scientist_fields(), &rec, ValidationMode::Full),
            Err(RecordViolation::MissingField)
        );
    }

    #[test]
    fn test_missing_field_checked_before_redundant_field() {
        let rec = record(json!({"name": "One", "koo": 3}));
        assert_eq!(
            check_record(&scientist_fields(), &rec, ValidationMode::Full),
            Err(RecordViolation::MissingField)
        );
    }

    #[test]
    fn test_redundant_field() {
        let rec = record(json!({
            "name": "One",
            "madness_level": 10,
            "galaxy_destruction_attempts": 12,
            "koo": 3
        }));
        assert_eq!(
            check_record(&scientist_fields(), &rec, ValidationMode::Full),
            Err(RecordViolation::RedundantField)
        );
    }

    #[test]
    fn test_swapped_field_is_redundant() {
        // Right size, but one declared field replaced by an unknown one
        let rec = record(json!({
            "name": "One",
            "madness_level": 10,
            "weight": 12
        }));
        assert_eq!(
            check_record(&scientist_fields(), &rec, ValidationMode::Full),
            Err(RecordViolation::RedundantField)
        );
    }

    #[test]
    fn test_invalid_types() {
        let bad_values = [
            json!("ten"),
            json!(10.5),
            json!(1.0),
            json!(null),
            json!(true),
            json!({}),
            json!([]),
        ];

        for bad in bad_values {
            let rec = record(json!({
                "name": "One",
                "madness_level": bad,
                "galaxy_destruction_attempts": 12
            }));
            assert_eq!(
                check_record(&scientist_fields(), &rec, ValidationMode::Full),
                Err(RecordViolation::InvalidType)
            );
        }
    }

    #[test]
    fn test_first_failing_key_decides() {
        let fields = scientist_fields();

        let type_first = record(json!({"name": 5, "koo": 1}));
        assert_eq!(
            check_record(&fields, &type_first, ValidationMode::Subset),
            Err(RecordViolation::InvalidType)
        );

        let unknown_first = record(json!({"koo": 1, "name": 5}));
        assert_eq!(
            check_record(&fields, &unknown_first, ValidationMode::Subset),
            Err(RecordViolation::RedundantField)
        );
    }

    #[test]
    fn test_subset_accepts_partial_and_empty() {
        let fields = scientist_fields();
        let partials = [
            json!({}),
            json!({"name": "Svoloch"}),
            json!({"name": "Svoloch", "galaxy_destruction_attempts": 500}),
        ];

        for partial in partials {
            let rec = record(partial);
            assert!(check_record(&fields, &rec, ValidationMode::Subset).is_ok());
        }
    }

    #[test]
    fn test_subset_rejects_primary_key() {
        let rec = record(json!({"name": "Svoloch", "scientist_id": 2}));
        assert_eq!(
            check_record(&scientist_fields(), &rec, ValidationMode::Subset),
            Err(RecordViolation::RedundantField)
        );
    }

    #[test]
    fn test_subset_rejects_timestamp() {
        let rec = record(json!({"time_added": "2020-01-01T00:00:00Z"}));
        assert_eq!(
            check_record(&scientist_fields(), &rec, ValidationMode::Subset),
            Err(RecordViolation::RedundantField)
        );
    }

    #[test]
    fn test_subset_type_mismatch() {
        let rec = record(json!({"name": {}}));
        assert_eq!(
            check_record(&scientist_fields(), &rec, ValidationMode::Subset),
            Err(RecordViolation::InvalidType)
        );
    }

    #[test]
    fn test_violation_messages() {
        let missing = RecordViolation::MissingField.to_string();
        assert_eq!(missing, "missing field in record");

        let redundant = RecordViolation::RedundantField.to_string();
        assert_eq!(redundant, "redundant field in record");

        let invalid = RecordViolation::InvalidType.to_string();
        assert_eq!(invalid, "invalid data type in record");
    }
}
