//! HTTP-level tests for users, investments, and transactions.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, memory_app, post_json, seeded_app};
use ledger_api::auth::password::verify_password;
use ledger_db::store::{EntityStore, MemoryStore};

fn user_body(username: &str) -> serde_json::Value {
    serde_json::json!({
        "username": username,
        "email": format!("{username}@example.com"),
        "password": "s3cret-passphrase"
    })
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_user_hides_password() {
    let app = memory_app();
    let response = post_json(app.clone(), "/api/users", user_body("amina")).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["username"], "amina");
    assert_eq!(json["email"], "amina@example.com");
    assert!(json.get("password").is_none());

    let response = get(app, "/api/users/1").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await.get("password").is_none());
}

#[tokio::test]
async fn test_create_user_stores_password_hash() {
    let store = Arc::new(MemoryStore::new());
    let app = build_test_app(store.clone());

    let response = post_json(app, "/api/users", user_body("amina")).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let stored = store.get_user(1).await.unwrap().unwrap();
    assert_ne!(stored.password, "s3cret-passphrase");
    assert!(verify_password("s3cret-passphrase", &stored.password).unwrap());
}

#[tokio::test]
async fn test_duplicate_username_returns_409() {
    let app = memory_app();
    let response = post_json(app.clone(), "/api/users", user_body("amina")).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let mut body = user_body("amina");
    body["email"] = serde_json::json!("other@example.com");
    let response = post_json(app.clone(), "/api/users", body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["message"], "username is already taken");

    let response = get(app, "/api/users/2").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_duplicate_email_returns_409() {
    let app = memory_app();
    post_json(app.clone(), "/api/users", user_body("amina")).await;

    let mut body = user_body("bilal");
    body["email"] = serde_json::json!("amina@example.com");
    let response = post_json(app, "/api/users", body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["message"], "email is already taken");
}

#[tokio::test]
async fn test_create_user_with_invalid_email_returns_400() {
    let app = memory_app();
    let mut body = user_body("amina");
    body["email"] = serde_json::json!("not-an-email");

    let response = post_json(app, "/api/users", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["message"],
        "email must be a valid address"
    );
}

#[tokio::test]
async fn test_get_missing_user_returns_404() {
    let app = memory_app();
    let response = get(app.clone(), "/api/users/3").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    for uri in ["/api/users/3/investments", "/api/users/3/transactions"] {
        let response = get(app.clone(), uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
    }

    let response = get(app, "/api/users/xyz/investments").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Investments
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_investment_defaults_returns() {
    let app = seeded_app().await;
    post_json(app.clone(), "/api/users", user_body("amina")).await;

    let response = post_json(
        app.clone(),
        "/api/investments",
        serde_json::json!({"userId": 1, "projectId": 3, "amount": 250000}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["userId"], 1);
    assert_eq!(json["projectId"], 3);
    assert_eq!(json["amount"], 250_000);
    assert_eq!(json["returns"], "0.00");

    let response = get(app, "/api/users/1/investments").await;
    let list = body_json(response).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0], json);
}

#[tokio::test]
async fn test_investment_with_unknown_references_returns_404() {
    let app = seeded_app().await;

    let response = post_json(
        app.clone(),
        "/api/investments",
        serde_json::json!({"userId": 9, "projectId": 1, "amount": 100}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "User with id 9 not found");

    let response = post_json(
        app.clone(),
        "/api/investments",
        serde_json::json!({"projectId": 99, "amount": 100}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(app, "/api/projects/1/investments").await;
    assert!(body_json(response).await.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_investment_requires_positive_amount() {
    let app = seeded_app().await;
    let response = post_json(
        app.clone(),
        "/api/investments",
        serde_json::json!({"projectId": 1, "amount": 0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(
        app,
        "/api/investments",
        serde_json::json!({"projectId": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Transactions
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_transaction_keeps_given_status() {
    let app = seeded_app().await;
    post_json(app.clone(), "/api/users", user_body("amina")).await;

    let response = post_json(
        app.clone(),
        "/api/transactions",
        serde_json::json!({
            "userId": 1,
            "projectId": 2,
            "amount": 120000,
            "type": "INVESTMENT",
            "status": "PENDING"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["type"], "INVESTMENT");
    assert_eq!(json["status"], "PENDING");

    let response = get(app, "/api/users/1/transactions").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await[0], json);
}

#[tokio::test]
async fn test_transaction_with_unknown_type_returns_400() {
    let app = seeded_app().await;
    let response = post_json(
        app,
        "/api/transactions",
        serde_json::json!({"amount": 10, "type": "REFUND", "status": "PENDING"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_transaction_with_unknown_project_returns_404() {
    let app = seeded_app().await;
    let response = post_json(
        app,
        "/api/transactions",
        serde_json::json!({
            "projectId": 77,
            "amount": 10,
            "type": "RETURN",
            "status": "COMPLETED"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["message"],
        "Project with id 77 not found"
    );
}
