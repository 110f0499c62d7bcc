//! CLI module for madlab
//!
//! Provides command-line interface for:
//! - serve: Start the HTTP service
//! - schema: Print entity schema descriptors

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{resolve_config, run, run_command, schema, schema_document, serve};
pub use config::ServiceConfig;
pub use errors::{CliError, CliResult};
