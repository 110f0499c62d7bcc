//! # madlab REST API Module
//!
//! CRUD endpoints for scientists and their devices. Every create and update
//! is validated against the entity schema and the business rules before the
//! record store is written.
//!
//! # Endpoints
//!
//! - `GET|POST /scientists`, `GET|PATCH|DELETE /scientists/:id`
//! - `GET|POST /scientists/:id/devices`
//! - `GET|POST /devices`, `GET|PATCH|DELETE /devices/:id`

pub mod body;
pub mod devices;
pub mod errors;
pub mod id;
pub mod scientists;
mod state;

use std::sync::Arc;

use axum::{routing::get, Router};

pub use errors::{RestError, RestResult};
pub use id::parse_id;
pub use state::ApiState;

/// Create the scientist and device routes
pub fn api_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route(
            "/scientists",
            get(scientists::list_scientists_handler).post(scientists::create_scientists_handler),
        )
        .route(
            "/scientists/:id",
            get(scientists::get_scientist_handler)
                .patch(scientists::update_scientist_handler)
                .delete(scientists::delete_scientist_handler),
        )
        .route(
            "/scientists/:id/devices",
            get(scientists::scientist_devices_handler)
                .post(devices::create_scientist_devices_handler),
        )
        .route(
            "/devices",
            get(devices::list_devices_handler).post(devices::create_devices_handler),
        )
        .route(
            "/devices/:id",
            get(devices::get_device_handler)
                .patch(devices::update_device_handler)
                .delete(devices::delete_device_handler),
        )
        .with_state(state)
}
