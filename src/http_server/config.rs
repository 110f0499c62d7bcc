//! Listener and CORS settings
//!
//! The `http` section of the service configuration. Every field has a
//! default, so `{}` is a complete section. The host must be an IP literal.

use std::net::SocketAddr;

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_PORT: u16 = 4567;

/// Rejected `http` section
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpConfigError {
    #[error("http.port must be > 0")]
    ZeroPort,

    #[error("http.host {0:?} is not an IP address")]
    BadHost(String),

    #[error("CORS origin {0:?} is not a valid header value")]
    BadOrigin(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Origins allowed by CORS; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    /// Defaults, listening on `port`
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// `host:port` as written in the configuration
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn listen_addr(&self) -> Result<SocketAddr, HttpConfigError> {
        if self.port == 0 {
            return Err(HttpConfigError::ZeroPort);
        }

        self.socket_addr()
            .parse()
            .map_err(|_| HttpConfigError::BadHost(self.host.clone()))
    }

    /// CORS allow-list as header values, `None` when any origin is allowed
    pub fn allowed_origins(&self) -> Result<Option<Vec<HeaderValue>>, HttpConfigError> {
        if self.cors_origins.is_empty() {
            return Ok(None);
        }

        self.cors_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .map_err(|_| HttpConfigError::BadOrigin(origin.clone()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    pub fn validate(&self) -> Result<(), HttpConfigError> {
        self.listen_addr()?;
        self.allowed_origins()?;
        Ok(())
    }
}
