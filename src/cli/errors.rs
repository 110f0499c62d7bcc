//! Errors that end a CLI command
//!
//! Configuration problems exit with status 2, everything else with 1, so a
//! supervisor can tell a bad config file from a server that failed at runtime.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::http_server::HttpConfigError;
use crate::observability::LoggingError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read config {}: {source}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("config {} is not valid JSON: {source}", .path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid config: {0}")]
    Http(#[from] HttpConfigError),

    #[error("logging setup failed: {0}")]
    Logging(#[from] LoggingError),

    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] io::Error),

    #[error("server stopped: {0}")]
    Serve(#[source] io::Error),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),

    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::ReadConfig { .. }
            | CliError::ParseConfig { .. }
            | CliError::InvalidConfig(_)
            | CliError::Http(_) => 2,
            _ => 1,
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
