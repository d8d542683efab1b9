//! Common test utilities for integration tests
//!
//! The harness runs the full router against the in-memory user store, so
//! the auth flows are exercised end to end without external services.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use live_chat_backend::{config::AppConfig, routes, state::AppState, store::InMemoryUserStore};
use std::sync::Arc;
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    pub store: Arc<InMemoryUserStore>,
}

impl TestApp {
    /// Create a new test application backed by an in-memory store
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.jwt.secret = "integration-test-secret".to_string();

        let store = Arc::new(InMemoryUserStore::new());
        let state = AppState::new(store.clone(), config);
        let app = routes::create_router(state);

        Self { app, store }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    /// Make a GET request with a bearer token
    pub async fn get_auth(&self, path: &str, token: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .header("Authorization", format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }
}
