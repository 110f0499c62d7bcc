//! # HTTP Server
//!
//! Combines the REST and health routers, adds request tracing and CORS, and
//! serves them over TCP.

use std::io;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::config::HttpServerConfig;
use super::observability_routes::health_routes;
use crate::rest_api::{api_routes, ApiState};
use crate::store::{InMemoryStore, RecordStore};

/// HTTP server for the scientists/devices API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Server with default configuration over an empty in-memory store
    pub fn new() -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self::with_config(HttpServerConfig::default(), store)
    }

    /// Server over the given store
    pub fn with_config(config: HttpServerConfig, store: Arc<dyn RecordStore>) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
        let allow_origin = match config.allowed_origins() {
            Ok(None) => AllowOrigin::any(),
            Ok(Some(origins)) => AllowOrigin::list(origins),
            Err(e) => {
                warn!(error = %e, "CORS origins rejected, cross-origin requests disabled");
                AllowOrigin::list(Vec::new())
            }
        };

        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods(Any)
            .allow_headers(Any)
    }

    fn build_router(config: &HttpServerConfig, store: Arc<dyn RecordStore>) -> Router {
        let state = Arc::new(ApiState::new(store));

        Router::new()
            .merge(health_routes(state.clone()))
            .merge(api_routes(state))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(Self::cors_layer(config)),
            )
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for in-process tests)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the listener fails
    pub async fn start(self) -> Result<(), io::Error> {
        let addr = self
            .config
            .listen_addr()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        let listener = TcpListener::bind(addr).await?;
        info!(%addr, "madlab listening");

        axum::serve(listener, self.router).await
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new();
        assert_eq!(server.socket_addr(), "0.0.0.0:4567");
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = HttpServerConfig::with_port(8080);
        let server = HttpServer::with_config(config, Arc::new(InMemoryStore::new()));
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_router_builds_with_rejected_origins() {
        let config = HttpServerConfig {
            cors_origins: vec!["http://localhost:3000".into(), "not a header\n".into()],
            ..Default::default()
        };
        let server = HttpServer::with_config(config, Arc::new(InMemoryStore::new()));
        let _router = server.router();
    }

    #[tokio::test]
    async fn test_start_rejects_host_name() {
        let config = HttpServerConfig {
            host: "localhost".into(),
            ..Default::default()
        };
        let server = HttpServer::with_config(config, Arc::new(InMemoryStore::new()));

        let err = server.start().await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
