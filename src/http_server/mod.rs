//! # madlab HTTP Server Module
//!
//! Serves the REST API over axum.
//!
//! # Endpoints
//!
//! - `/health` - Health check with table sizes
//! - `/scientists`, `/devices` - CRUD, see `rest_api`

pub mod config;
pub mod observability_routes;
pub mod server;

pub use config::{HttpConfigError, HttpServerConfig};
pub use server::HttpServer;
