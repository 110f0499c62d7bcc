//! Shared fixtures for the HTTP API tests
//!
//! Every test gets its own router over a freshly seeded in-memory store.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use madlab::http_server::{HttpServer, HttpServerConfig};
use madlab::store::{InMemoryStore, NewDevice, NewScientist, RecordStore};
use serde_json::Value;
use tower::ServiceExt;

pub const FEYNMAN: i64 = 1;
pub const FRANKENSTEIN: i64 = 2;
pub const BROWN: i64 = 3;
pub const NO_INVENTIONS: i64 = 4;
pub const KOO: i64 = 5;

pub const ATOMIC_BOMB: i64 = 1;
pub const DELOREAN: i64 = 2;

fn scientist(name: &str, madness_level: i64, attempts: i64) -> NewScientist {
    NewScientist {
        name: name.to_string(),
        madness_level,
        galaxy_destruction_attempts: attempts,
    }
}

fn device(name: &str, scientist_id: i64, power: i64) -> NewDevice {
    NewDevice {
        name: name.to_string(),
        scientist_id,
        power,
    }
}

/// Five scientists and five devices; Frankenstein and No Inventions own none
pub fn seeded_store() -> Arc<InMemoryStore> {
    let store = Arc::new(InMemoryStore::new());
    store
        .create_scientists(vec![
            scientist("Richard Feynman", 5, 0),
            scientist("Frankenstein", 11, 0),
            scientist("Emmett Brown", 7, 0),
            scientist("No Inventions", 20, 4),
            scientist("Koo", 20, 4),
        ])
        .unwrap();
    store
        .create_devices(vec![
            device("Atomic bomb", FEYNMAN, 6),
            device("DeLorean time machine", BROWN, 0),
            device("Koo1", KOO, 0),
            device("Koo2", KOO, 0),
            device("Koo3", KOO, 0),
        ])
        .unwrap();
    store
}

pub fn app(store: Arc<InMemoryStore>) -> Router {
    HttpServer::with_config(HttpServerConfig::default(), store).router()
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

pub async fn send(app: &Router, method: Method, uri: &str, body: &str) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|value| value.to_str().unwrap().to_string());
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    TestResponse {
        status,
        content_type,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::GET, uri, "").await
}

pub async fn post(app: &Router, uri: &str, body: &str) -> TestResponse {
    send(app, Method::POST, uri, body).await
}

pub async fn patch(app: &Router, uri: &str, body: &str) -> TestResponse {
    send(app, Method::PATCH, uri, body).await
}

pub async fn delete(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::DELETE, uri, "").await
}
