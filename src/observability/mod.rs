//! Observability subsystem for madlab
//!
//! Logging goes through `tracing`; this module only wires up the subscriber.
//! HTTP request spans come from `tower_http::trace::TraceLayer` in the
//! server module.

mod logging;

pub use logging::{init_logging, LogConfig, LoggingError};
