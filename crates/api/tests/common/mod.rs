use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use ledger_db::store::{EntityStore, MemoryStore, SqlStore};
use tower::ServiceExt;

use ledger_api::config::ServerConfig;
use ledger_api::router::build_app_router;
use ledger_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        seed_fixtures: false,
        ..ServerConfig::default()
    }
}

/// Build the full application router over `store`, with the same
/// middleware stack production uses.
pub fn build_test_app(store: Arc<dyn EntityStore>) -> Router {
    let state = AppState {
        store,
        config: Arc::new(test_config()),
    };
    build_app_router(state)
}

/// An app over an empty in-memory store.
#[allow(dead_code)]
pub fn memory_app() -> Router {
    build_test_app(Arc::new(MemoryStore::new()))
}

/// An app over an in-memory store holding the showcase fixtures.
#[allow(dead_code)]
pub async fn seeded_app() -> Router {
    let store = Arc::new(MemoryStore::new());
    ledger_db::fixtures::seed_if_empty(store.as_ref())
        .await
        .expect("fixtures should load");
    build_test_app(store)
}

/// An app over a migrated, empty in-memory SQLite database.
#[allow(dead_code)]
pub async fn sqlite_app() -> Router {
    let pool = ledger_db::create_pool("sqlite::memory:", 1, Duration::from_secs(5))
        .await
        .expect("in-memory pool should open");
    ledger_db::run_migrations(&pool)
        .await
        .expect("migrations should apply");
    build_test_app(Arc::new(SqlStore::new(pool)))
}

/// Send a GET request.
#[allow(dead_code)]
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

/// Send a POST request with a JSON body.
#[allow(dead_code)]
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

/// Send a PATCH request with a JSON body.
#[allow(dead_code)]
pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body)).await
}

/// Send a POST request with a raw, possibly malformed, JSON payload.
#[allow(dead_code)]
pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A complete, valid project creation body.
#[allow(dead_code)]
pub fn project_body(title: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "description": "Gated community with solar backup",
        "location": "Hyderabad, Pakistan",
        "roi": "15.00",
        "minInvestment": 100000,
        "targetAmount": 15000000,
        "currentAmount": 10500000,
        "status": "FUNDING",
        "imageUrl": "https://example.com/banglow.jpg"
    })
}
