//! Entity column declarations and the schema descriptor derived from them
//!
//! Columns mirror the relational tables backing the service. The mutable
//! field set of an entity is a pure function of its columns: everything
//! except the primary key and the server-stamped `time_added`.

use std::fmt;

use serde::Serialize;

use super::types::{ColumnType, FieldType, SchemaFields};

/// Server-managed creation timestamp column
pub const TIME_ADDED: &str = "time_added";

/// Entity types served by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Entity {
    Scientist,
    Device,
}

/// A declared column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnDef {
    pub name: &'static str,
    pub column_type: ColumnType,
    pub primary_key: bool,
    /// Entity referenced by this column, if it is a foreign key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<Entity>,
}

impl ColumnDef {
    const fn primary_key(name: &'static str) -> Self {
        Self {
            name,
            column_type: ColumnType::Integer,
            primary_key: true,
            references: None,
        }
    }

    const fn new(name: &'static str, column_type: ColumnType) -> Self {
        Self {
            name,
            column_type,
            primary_key: false,
            references: None,
        }
    }

    const fn foreign_key(name: &'static str, target: Entity) -> Self {
        Self {
            name,
            column_type: ColumnType::Integer,
            primary_key: false,
            references: Some(target),
        }
    }
}

const SCIENTIST_COLUMNS: &[ColumnDef] = &[
    ColumnDef::primary_key("scientist_id"),
    ColumnDef::new("name", ColumnType::String),
    ColumnDef::new("madness_level", ColumnType::Integer),
    ColumnDef::new("galaxy_destruction_attempts", ColumnType::Integer),
    ColumnDef::new(TIME_ADDED, ColumnType::Timestamp),
];

const DEVICE_COLUMNS: &[ColumnDef] = &[
    ColumnDef::primary_key("device_id"),
    ColumnDef::new("name", ColumnType::String),
    ColumnDef::foreign_key("scientist_id", Entity::Scientist),
    ColumnDef::new("power", ColumnType::Integer),
    ColumnDef::new(TIME_ADDED, ColumnType::Timestamp),
];

impl Entity {
    pub const ALL: [Entity; 2] = [Entity::Scientist, Entity::Device];

    /// Table (and URL collection) name
    pub fn table(&self) -> &'static str {
        match self {
            Entity::Scientist => "scientists",
            Entity::Device => "devices",
        }
    }

    pub fn primary_key(&self) -> &'static str {
        match self {
            Entity::Scientist => "scientist_id",
            Entity::Device => "device_id",
        }
    }

    pub fn columns(&self) -> &'static [ColumnDef] {
        match self {
            Entity::Scientist => SCIENTIST_COLUMNS,
            Entity::Device => DEVICE_COLUMNS,
        }
    }

    /// Full descriptor, as printed by `madlab schema`
    pub fn describe(&self) -> EntityDescriptor {
        EntityDescriptor {
            entity: *self,
            table: self.table(),
            primary_key: self.primary_key(),
            columns: self.columns(),
            fields: schema_fields(*self),
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Scientist => write!(f, "scientist"),
            Entity::Device => write!(f, "device"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EntityDescriptor {
    pub entity: Entity,
    pub table: &'static str,
    pub primary_key: &'static str,
    pub columns: &'static [ColumnDef],
    pub fields: SchemaFields,
}

/// Mutable fields of `entity` and their expected types.
///
/// Skips the primary key and the timestamp column.
pub fn schema_fields(entity: Entity) -> SchemaFields {
    let fields = entity
        .columns()
        .iter()
        .filter(|column| !column.primary_key && column.name != TIME_ADDED)
        .filter_map(|column| {
            let field_type = match column.column_type {
                ColumnType::String => FieldType::String,
                ColumnType::Integer => FieldType::Integer,
                ColumnType::Timestamp => return None,
            };
            Some((column.name, field_type))
        })
        .collect();

    SchemaFields::new(fields)
}
