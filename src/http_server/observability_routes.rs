//! Observability HTTP Routes
//!
//! `GET /health` reports liveness plus the row count of each table, which
//! also proves the record store is reachable.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::rest_api::{ApiState, RestResult};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub scientists: usize,
    pub devices: usize,
}

/// Health check route
pub fn health_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(state)
}

async fn health_handler(State(state): State<Arc<ApiState>>) -> RestResult<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        scientists: state.store.scientists()?.len(),
        devices: state.store.devices()?.len(),
    }))
}
