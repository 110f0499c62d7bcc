//! CLI command implementations
//!
//! `serve` boots logging, builds the server and blocks on it; `schema` is a
//! pure dump of the entity descriptors.

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use super::args::Command;
use super::config::ServiceConfig;
use super::errors::{CliError, CliResult};
use crate::http_server::HttpServer;
use crate::observability::init_logging;
use crate::schema::Entity;
use crate::store::InMemoryStore;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, host, port } => serve(config, host, port),
        Command::Schema => schema(),
    }
}

/// Resolves the effective configuration: file (if any), then CLI overrides
pub fn resolve_config(
    config_path: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
) -> CliResult<ServiceConfig> {
    let mut config = match config_path {
        Some(path) => ServiceConfig::load(&path)?,
        None => ServiceConfig::default(),
    };

    if let Some(host) = host {
        config.http.host = host;
    }
    if let Some(port) = port {
        config.http.port = port;
    }
    config.http.validate()?;

    Ok(config)
}

/// Start the HTTP service
///
/// 1. Resolve configuration
/// 2. Install the log subscriber
/// 3. Build the server over an empty in-memory store
/// 4. Serve until the listener fails
pub fn serve(
    config_path: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
) -> CliResult<()> {
    let config = resolve_config(config_path, host, port)?;

    init_logging(&config.log)?;

    let server = HttpServer::with_config(config.http.clone(), Arc::new(InMemoryStore::new()));
    info!(addr = %server.socket_addr(), "starting madlab");

    let rt = tokio::runtime::Runtime::new().map_err(CliError::Runtime)?;

    rt.block_on(server.start()).map_err(CliError::Serve)
}

/// Descriptors of every entity as a JSON array
pub fn schema_document() -> CliResult<Value> {
    let descriptors: Vec<_> = Entity::ALL.iter().map(Entity::describe).collect();
    Ok(serde_json::to_value(descriptors)?)
}

/// Print the schema descriptors to stdout
pub fn schema() -> CliResult<()> {
    let document = schema_document()?;

    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, &document)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}
