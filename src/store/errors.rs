//! # Store Errors
//!
//! Constraint and access failures reported by a record store.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A name column would hold the same value twice
    #[error("unique constraint failed: {table}.name = {name}")]
    UniqueViolation { table: &'static str, name: String },

    /// A row is still referenced and cannot be deleted
    #[error("foreign key constraint failed: {table} row still referenced")]
    ForeignKeyViolation { table: &'static str },

    /// A row references a parent that does not exist
    #[error("foreign key constraint failed: {table} references missing row {id}")]
    MissingReference { table: &'static str, id: i64 },

    /// No row with this primary key
    #[error("no row {id} in {table}")]
    NotFound { table: &'static str, id: i64 },

    /// A writer panicked while holding the table lock
    #[error("store lock poisoned")]
    Poisoned,
}
