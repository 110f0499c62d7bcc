//! # REST API Errors
//!
//! Error types for the REST API module. Every variant is terminal for the
//! request that raised it.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{debug, error};

use crate::schema::{Entity, RecordViolation};
use crate::store::StoreError;

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

/// REST API errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RestError {
    // ==================
    // Body Shape (400)
    // ==================
    /// Body is not valid JSON
    #[error("failed to parse JSON")]
    MalformedJson,

    /// Bulk create body is not an array
    #[error("request body must be an array")]
    NotAnArray,

    /// Bulk create array holds something other than objects
    #[error("array must only contain hashes")]
    NonRecordElement,

    /// Update body is not a single object
    #[error("request body must be a hash")]
    NotARecord,

    /// Record does not fit the entity schema
    #[error("{0}")]
    Record(#[from] RecordViolation),

    // ==================
    // Business Rules (400)
    // ==================
    #[error("negative madness level")]
    NegativeMadnessLevel,

    #[error("negative number of galaxy destruction attempts")]
    NegativeDestructionAttempts,

    #[error("negative power")]
    NegativePower,

    /// Two records of one batch share a name
    #[error("{} with the same name", .0.table())]
    DuplicateInBatch(Entity),

    /// Name already used by a stored row
    #[error("name {0} already in database")]
    NameTaken(String),

    /// Device points at a scientist that does not exist
    #[error("no such scientist")]
    NoSuchScientist,

    // ==================
    // Addressing
    // ==================
    /// Path id is not a positive integer
    #[error("invalid id")]
    InvalidId,

    /// No row with the given id
    #[error("not found")]
    NotFound,

    /// Row is still referenced and was left in place
    #[error("foreign key constraint failed")]
    ForeignKeyViolation,

    // ==================
    // Server Errors (5xx)
    // ==================
    #[error("internal error: {0}")]
    Internal(String),
}

impl RestError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::NotFound => StatusCode::NOT_FOUND,
            RestError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<StoreError> for RestError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UniqueViolation { name, .. } => RestError::NameTaken(name),
            StoreError::ForeignKeyViolation { .. } => RestError::ForeignKeyViolation,
            StoreError::MissingReference { .. } => RestError::NoSuchScientist,
            StoreError::NotFound { .. } => RestError::NotFound,
            StoreError::Poisoned => RestError::Internal(err.to_string()),
        }
    }
}

/// 400 carries the plain-text message, 404 an empty body.
impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match status {
            StatusCode::NOT_FOUND => status.into_response(),
            StatusCode::INTERNAL_SERVER_ERROR => {
                error!(error = %self, "request failed");
                (status, "internal server error").into_response()
            }
            _ => {
                debug!(error = %self, status = status.as_u16(), "request rejected");
                (status, self.to_string()).into_response()
            }
        }
    }
}
