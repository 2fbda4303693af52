//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use axum_extra::headers::{Authorization, HeaderMapExt};
use serde_json::Value;
use tower::ServiceExt;

use scooter_server::config::Settings;
use scooter_server::presentation::http::routes::create_router;
use scooter_server::startup::AppState;

/// Seeded user with no reservation
pub const USER: &str = "basic";
/// Seeded user holding ghi789
pub const PREMIUM: &str = "premium";
pub const PASSWORD: &str = "pass";

/// Test application builder
pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    /// Fresh seeded fleet, default settings
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self::with_state(AppState::new(settings))
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            router: create_router(state),
        }
    }

    /// Send a request as-is
    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Make an authenticated GET request
    pub async fn get(&self, uri: &str) -> Response {
        self.get_as(uri, USER, PASSWORD).await
    }

    pub async fn get_as(&self, uri: &str, user: &str, password: &str) -> Response {
        let mut request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        request
            .headers_mut()
            .typed_insert(Authorization::basic(user, password));
        self.send(request).await
    }

    /// Make an authenticated PATCH request with JSON body
    pub async fn patch_json(&self, uri: &str, body: &str) -> Response {
        self.patch_json_as(uri, body, USER).await
    }

    pub async fn patch_json_as(&self, uri: &str, body: &str, user: &str) -> Response {
        let mut request = Request::builder()
            .method("PATCH")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        request
            .headers_mut()
            .typed_insert(Authorization::basic(user, PASSWORD));
        self.send(request).await
    }

    /// GET a scooter and return its JSON
    pub async fn scooter(&self, id: &str) -> Value {
        let response = self.get(&format!("/scooter/{}", id)).await;
        assert_eq!(response.status(), StatusCode::OK);
        json_body(response).await
    }
}

/// Read a response body as JSON
pub async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Read a response body as text
pub async fn text_body(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
