#![allow(dead_code)]

use std::sync::Arc;

use activities_core::activity::{ActivityFields, ActivityId, ValidatedPatch};
use activities_db::models::activity::{Activity, ActivitySummary};
use activities_db::{ActivityStore, InMemoryActivityStore, StoreError};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use activities_api::config::ServerConfig;
use activities_api::router::build_app_router;
use activities_api::state::AppState;

/// Build a test `ServerConfig` from the given variables, defaults elsewhere.
pub fn test_config(vars: &[(&str, &str)]) -> ServerConfig {
    let vars: Vec<(String, String)> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ServerConfig::from_lookup(|key| {
        vars.iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    })
    .unwrap()
}

/// Build the full application router over a fresh in-memory store.
///
/// `Router` is cheap to clone; clones share the same store, so a test can
/// issue several requests against one app.
pub fn build_test_app() -> Router {
    build_app_with(Arc::new(InMemoryActivityStore::new()), &test_config(&[]))
}

pub fn build_app_with(store: Arc<dyn ActivityStore>, config: &ServerConfig) -> Router {
    build_app_router(AppState::new(store), config)
}

// ---------------------------------------------------------------------------
// Failing store
// ---------------------------------------------------------------------------

/// A store whose every call fails as if the database were unreachable.
pub struct UnavailableStore;

fn unavailable() -> StoreError {
    StoreError::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl ActivityStore for UnavailableStore {
    async fn create(&self, _fields: &ActivityFields) -> Result<Activity, StoreError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: ActivityId) -> Result<Option<Activity>, StoreError> {
        Err(unavailable())
    }

    async fn find_by_name(&self, _name: &str) -> Result<Option<Activity>, StoreError> {
        Err(unavailable())
    }

    async fn list(&self) -> Result<Vec<Activity>, StoreError> {
        Err(unavailable())
    }

    async fn list_summaries(&self) -> Result<Vec<ActivitySummary>, StoreError> {
        Err(unavailable())
    }

    async fn update(
        &self,
        _id: ActivityId,
        _patch: &ValidatedPatch,
    ) -> Result<Option<Activity>, StoreError> {
        Err(unavailable())
    }

    async fn delete(&self, _id: ActivityId) -> Result<bool, StoreError> {
        Err(unavailable())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(unavailable())
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::POST, uri, body.to_string()).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::PUT, uri, body.to_string()).await
}

/// Send a raw string body labelled as JSON.
pub async fn send_json(app: Router, method: Method, uri: &str, body: String) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

/// Send a form-encoded body, as an HTML form submission would.
pub async fn send_form(app: Router, method: Method, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Send a bodiless request with an arbitrary method.
pub async fn send_empty(app: Router, method: Method, uri: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// A complete, valid create payload for an activity named `name`.
pub fn activity_payload(name: &str) -> serde_json::Value {
    serde_json::json!({
        "activityName": name,
        "location": "Harbour Park",
        "date": "2025-06-14",
        "time": "9:00 AM",
        "description": "Bring gloves and water",
    })
}

/// Create an activity through the API and return its JSON.
pub async fn create_activity(app: &Router, name: &str) -> serde_json::Value {
    let response = post_json(app.clone(), "/activities", activity_payload(name)).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await
}
