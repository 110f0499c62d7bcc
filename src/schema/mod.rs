//! Schema subsystem for madlab
//!
//! Schemas are derived from the declared columns of each entity and enforced
//! on every create and update before the record store is touched.
//!
//! # Rules
//!
//! - No missing fields on create
//! - No undeclared fields (primary key and timestamp included)
//! - No nulls, defaults, or coercion

mod descriptor;
mod types;
mod validator;

pub use descriptor::{schema_fields, ColumnDef, Entity, EntityDescriptor, TIME_ADDED};
pub use types::{ColumnType, FieldType, Record, SchemaFields};
pub use validator::{check_record, RecordViolation, ValidationMode};
