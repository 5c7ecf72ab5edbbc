//! Shared helpers for integration tests.

use axum::{
    body::to_bytes,
    http::{HeaderMap, HeaderValue},
    response::Response,
};
use ome::server::{
    controller::util::ajax::{XML_HTTP_REQUEST, X_REQUESTED_WITH},
    model::app::AppState,
};
use ome_test_utils::TestContext;

/// Extension trait for TestContext to build the application state
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        self.to_app_state()
    }
}

/// Reads a response body as JSON
pub async fn body_json(resp: Response) -> serde_json::Value {
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&body).expect("Response body is not JSON")
}

/// Builds the header map of an interactive request
pub fn ajax_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(X_REQUESTED_WITH, HeaderValue::from_static(XML_HTTP_REQUEST));
    headers
}
