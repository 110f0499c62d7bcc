//! Schema type definitions
//!
//! Supported column types:
//! - integer: 64-bit signed integer
//! - string: UTF-8 string
//! - timestamp: server-assigned UTC instant (never client-writable)
//!
//! Only `integer` and `string` columns surface as mutable fields.

use serde::ser::{Serialize, Serializer};
use serde_json::{Map, Value};

/// A candidate row as decoded from a request body, keys in document order.
pub type Record = Map<String, Value>;

/// Declared type of a stored column
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// 64-bit signed integer
    Integer,
    /// UTF-8 string
    String,
    /// Server-managed timestamp
    Timestamp,
}

/// Primitive type expected for a mutable field
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// 64-bit signed integer
    Integer,
}

impl FieldType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
        }
    }

    /// Exact type match, no coercion.
    ///
    /// Floats (even `1.0`), booleans, null and nested values never match
    /// `Integer`; integers that do not fit in an `i64` don't either.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Integer => value.is_i64(),
        }
    }
}

/// Mutable fields of an entity in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaFields {
    fields: Vec<(&'static str, FieldType)>,
}

impl SchemaFields {
    pub fn new(fields: Vec<(&'static str, FieldType)>) -> Self {
        Self { fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Expected type of `name`, `None` if the field is not declared
    pub fn get(&self, name: &str) -> Option<FieldType> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, field_type)| *field_type)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(name, _)| *name)
    }

    /// Copy of these fields with `name` left out
    pub fn without(&self, name: &str) -> Self {
        Self {
            fields: self
                .fields
                .iter()
                .filter(|(field, _)| *field != name)
                .copied()
                .collect(),
        }
    }
}

impl Serialize for SchemaFields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = self.fields.iter().map(|(name, ty)| (*name, ty));
        serializer.collect_map(entries)
    }
}
