//! Scientist handlers
//!
//! `/scientists` and `/scientists/:id`, plus the read side of
//! `/scientists/:id/devices`.

use std::collections::HashSet;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use super::body;
use super::errors::{RestError, RestResult};
use super::id::require_id;
use super::state::ApiState;
use crate::schema::{check_record, schema_fields, Entity, ValidationMode};
use crate::store::{Device, NewScientist, Scientist, ScientistPatch};

/// Non-negativity rules; `None` means the field was not supplied
fn check_counts(madness_level: Option<i64>, attempts: Option<i64>) -> RestResult<()> {
    if matches!(madness_level, Some(level) if level < 0) {
        return Err(RestError::NegativeMadnessLevel);
    }
    if matches!(attempts, Some(count) if count < 0) {
        return Err(RestError::NegativeDestructionAttempts);
    }
    Ok(())
}

pub async fn list_scientists_handler(
    State(state): State<Arc<ApiState>>,
) -> RestResult<Json<Vec<Scientist>>> {
    Ok(Json(state.store.scientists()?))
}

pub async fn get_scientist_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> RestResult<Json<Scientist>> {
    let id = require_id(&id)?;
    let scientist = state.store.scientist(id)?.ok_or(RestError::NotFound)?;
    Ok(Json(scientist))
}

pub async fn scientist_devices_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> RestResult<Json<Vec<Device>>> {
    let id = require_id(&id)?;
    if state.store.scientist(id)?.is_none() {
        return Err(RestError::NotFound);
    }
    Ok(Json(state.store.devices_of(id)?))
}

/// Bulk create. Nothing is written unless every record passes.
pub async fn create_scientists_handler(
    State(state): State<Arc<ApiState>>,
    body: Bytes,
) -> RestResult<StatusCode> {
    let records = body::record_batch(&body)?;
    let fields = schema_fields(Entity::Scientist);

    let _gate = state.write_gate().await;

    let mut batch = Vec::with_capacity(records.len());
    let mut seen = HashSet::new();
    for record in records {
        check_record(&fields, &record, ValidationMode::Full)?;
        let scientist: NewScientist = body::decode(record)?;

        check_counts(
            Some(scientist.madness_level),
            Some(scientist.galaxy_destruction_attempts),
        )?;
        if !seen.insert(scientist.name.clone()) {
            return Err(RestError::DuplicateInBatch(Entity::Scientist));
        }
        if state.store.scientist_by_name(&scientist.name)?.is_some() {
            return Err(RestError::NameTaken(scientist.name));
        }

        batch.push(scientist);
    }

    let created = state.store.create_scientists(batch)?;
    info!(entity = %Entity::Scientist, count = created.len(), "records created");

    Ok(StatusCode::NO_CONTENT)
}

/// Partial update. Unsupplied fields and `time_added` keep their values.
pub async fn update_scientist_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
    body: Bytes,
) -> RestResult<StatusCode> {
    let id = require_id(&id)?;

    let _gate = state.write_gate().await;

    let current = state.store.scientist(id)?.ok_or(RestError::NotFound)?;

    let record = body::single_record(&body)?;
    check_record(
        &schema_fields(Entity::Scientist),
        &record,
        ValidationMode::Subset,
    )?;
    let patch: ScientistPatch = body::decode(record)?;

    check_counts(patch.madness_level, patch.galaxy_destruction_attempts)?;
    if let Some(name) = &patch.name {
        // Keeping one's own name is not a collision
        if *name != current.name && state.store.scientist_by_name(name)?.is_some() {
            return Err(RestError::NameTaken(name.clone()));
        }
    }

    state.store.update_scientist(id, patch)?;
    info!(entity = %Entity::Scientist, id, "record updated");

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_scientist_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> RestResult<StatusCode> {
    let id = require_id(&id)?;

    let _gate = state.write_gate().await;

    if state.store.scientist(id)?.is_none() {
        return Err(RestError::NotFound);
    }
    state.store.delete_scientist(id)?;
    info!(entity = %Entity::Scientist, id, "record deleted");

    Ok(StatusCode::NO_CONTENT)
}
