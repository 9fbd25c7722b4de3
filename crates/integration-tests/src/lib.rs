//! Integration tests for GreenLife.
//!
//! The tests drive the storefront router in-process with `tower`'s
//! `ServiceExt::oneshot` - no live server, database, or network is
//! required. Durable state sits in a [`MemoryBlobStore`] (or a tempdir
//! [`FileBlobStore`] where persistence across "sessions" is the point).
//!
//! [`MemoryBlobStore`]: greenlife_storefront::blob::MemoryBlobStore
//! [`FileBlobStore`]: greenlife_storefront::blob::FileBlobStore

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::util::ServiceExt;

use greenlife_storefront::blob::MemoryBlobStore;
use greenlife_storefront::config::StorefrontConfig;
use greenlife_storefront::routes;
use greenlife_storefront::state::AppState;

/// A storefront wired up for in-process testing.
pub struct TestContext {
    pub state: AppState,
    pub app: Router,
}

/// Build a storefront over a fresh in-memory blob store with the seeded
/// catalog.
///
/// # Panics
///
/// Panics if the application state cannot be constructed.
#[must_use]
pub fn context() -> TestContext {
    let state = AppState::new(
        StorefrontConfig::default(),
        Arc::new(MemoryBlobStore::new()),
    )
    .expect("app state");
    let app = Router::new()
        .merge(routes::routes())
        .with_state(state.clone());
    TestContext { state, app }
}

/// Send a request and decode the JSON response. Empty bodies decode to
/// Null; non-JSON bodies (plain-text error messages) to a String.
///
/// # Panics
///
/// Panics if the request cannot be built or the router fails.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => Request::builder().method(method).uri(uri).body(Body::empty()),
    }
    .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, value)
}
