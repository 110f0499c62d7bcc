//! madlab - record service for mad scientists and their devices
//!
//! CRUD over HTTP with schema-checked request bodies.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod rest_api;
pub mod schema;
pub mod store;
