//! Service configuration file
//!
//! ```json
//! {
//!   "http": { "host": "0.0.0.0", "port": 4567, "cors_origins": [] },
//!   "log": { "level": "info", "json": false }
//! }
//! ```
//!
//! Every field is optional.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::http_server::HttpServerConfig;
use crate::observability::LogConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub http: HttpServerConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl ServiceConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(source) => {
                let path = path.to_path_buf();
                return Err(CliError::ReadConfig { path, source });
            }
        };

        let config: ServiceConfig = match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(source) => {
                let path = path.to_path_buf();
                return Err(CliError::ParseConfig { path, source });
            }
        };

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        self.http.validate()?;

        self.log
            .filter()
            .map_err(|e| CliError::InvalidConfig(format!("log.level: {}", e)))?;

        Ok(())
    }
}
