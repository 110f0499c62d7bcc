//! Device handlers
//!
//! `/devices`, `/devices/:id` and the nested create
//! `POST /scientists/:id/devices`, which takes the owner from the path.

use std::collections::HashSet;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::info;

use super::body;
use super::errors::{RestError, RestResult};
use super::id::require_id;
use super::state::ApiState;
use crate::schema::{check_record, schema_fields, Entity, Record, SchemaFields, ValidationMode};
use crate::store::{Device, DevicePatch, NewDevice};

const OWNER_FIELD: &str = "scientist_id";

fn check_power(power: Option<i64>) -> RestResult<()> {
    if matches!(power, Some(power) if power < 0) {
        return Err(RestError::NegativePower);
    }
    Ok(())
}

fn require_scientist(state: &ApiState, scientist_id: i64) -> RestResult<()> {
    match state.store.scientist(scientist_id)? {
        Some(_) => Ok(()),
        None => Err(RestError::NoSuchScientist),
    }
}

/// Validates every record, then writes the batch in one store call.
///
/// With `owner` set, the owner field is dropped from each record before
/// validation and the owner id written in its place.
fn create_devices(
    state: &ApiState,
    records: Vec<Record>,
    fields: &SchemaFields,
    owner: Option<i64>,
) -> RestResult<usize> {
    let mut batch = Vec::with_capacity(records.len());
    let mut seen = HashSet::new();

    for record in records {
        let mut record: Record = match owner {
            Some(_) => record
                .into_iter()
                .filter(|(key, _)| key != OWNER_FIELD)
                .collect(),
            None => record,
        };

        check_record(fields, &record, ValidationMode::Full)?;

        if let Some(owner) = owner {
            record.insert(OWNER_FIELD.to_string(), Value::from(owner));
        }
        let device: NewDevice = body::decode(record)?;

        check_power(Some(device.power))?;
        if !seen.insert(device.name.clone()) {
            return Err(RestError::DuplicateInBatch(Entity::Device));
        }
        if state.store.device_by_name(&device.name)?.is_some() {
            return Err(RestError::NameTaken(device.name));
        }
        require_scientist(state, device.scientist_id)?;

        batch.push(device);
    }

    Ok(state.store.create_devices(batch)?.len())
}

pub async fn list_devices_handler(
    State(state): State<Arc<ApiState>>,
) -> RestResult<Json<Vec<Device>>> {
    Ok(Json(state.store.devices()?))
}

pub async fn get_device_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> RestResult<Json<Device>> {
    let id = require_id(&id)?;
    let device = state.store.device(id)?.ok_or(RestError::NotFound)?;
    Ok(Json(device))
}

pub async fn create_devices_handler(
    State(state): State<Arc<ApiState>>,
    body: Bytes,
) -> RestResult<StatusCode> {
    let records = body::record_batch(&body)?;

    let _gate = state.write_gate().await;

    let count = create_devices(&state, records, &schema_fields(Entity::Device), None)?;
    info!(entity = %Entity::Device, count, "records created");

    Ok(StatusCode::NO_CONTENT)
}

pub async fn create_scientist_devices_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
    body: Bytes,
) -> RestResult<StatusCode> {
    let scientist_id = require_id(&id)?;

    let _gate = state.write_gate().await;

    if state.store.scientist(scientist_id)?.is_none() {
        return Err(RestError::NotFound);
    }

    let records = body::record_batch(&body)?;
    let fields = schema_fields(Entity::Device).without(OWNER_FIELD);
    let count = create_devices(&state, records, &fields, Some(scientist_id))?;
    info!(entity = %Entity::Device, count, scientist_id, "records created");

    Ok(StatusCode::NO_CONTENT)
}

pub async fn update_device_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
    body: Bytes,
) -> RestResult<StatusCode> {
    let id = require_id(&id)?;

    let _gate = state.write_gate().await;

    let current = state.store.device(id)?.ok_or(RestError::NotFound)?;

    let record = body::single_record(&body)?;
    check_record(
        &schema_fields(Entity::Device),
        &record,
        ValidationMode::Subset,
    )?;
    let patch: DevicePatch = body::decode(record)?;

    check_power(patch.power)?;
    if let Some(name) = &patch.name {
        if *name != current.name && state.store.device_by_name(name)?.is_some() {
            return Err(RestError::NameTaken(name.clone()));
        }
    }
    if let Some(scientist_id) = patch.scientist_id {
        require_scientist(&state, scientist_id)?;
    }

    state.store.update_device(id, patch)?;
    info!(entity = %Entity::Device, id, "record updated");

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_device_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> RestResult<StatusCode> {
    let id = require_id(&id)?;

    let _gate = state.write_gate().await;

    if state.store.device(id)?.is_none() {
        return Err(RestError::NotFound);
    }
    state.store.delete_device(id)?;
    info!(entity = %Entity::Device, id, "record deleted");

    Ok(StatusCode::NO_CONTENT)
}
