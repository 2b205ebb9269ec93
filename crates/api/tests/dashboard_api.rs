//! HTTP-level tests for `/api/dashboard/stats` and `/api/testimonials`.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, memory_app, patch_json, post_json, project_body, seeded_app, sqlite_app};

// ---------------------------------------------------------------------------
// Dashboard statistics
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_stats_on_empty_store_are_zero() {
    let app = memory_app();
    let response = get(app, "/api/dashboard/stats").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json,
        serde_json::json!({
            "totalInvested": 0,
            "monthlyReturns": 0,
            "activeProjects": 0,
            "totalProjects": 0,
            "avgROI": "0.0"
        })
    );
}

#[tokio::test]
async fn test_stats_over_fixtures_use_rounded_average() {
    let app = seeded_app().await;
    let json = body_json(get(app, "/api/dashboard/stats").await).await;

    assert_eq!(json["totalInvested"], 21_210_000);
    assert_eq!(json["avgROI"], "12.8");
    assert_eq!(json["monthlyReturns"], 226_240);
    assert_eq!(json["activeProjects"], 1);
    assert_eq!(json["totalProjects"], 3);
}

#[tokio::test]
async fn test_stats_reflect_latest_writes() {
    let app = seeded_app().await;
    let before = body_json(get(app.clone(), "/api/dashboard/stats").await).await;

    let response = patch_json(
        app.clone(),
        "/api/projects/2",
        serde_json::json!({"status": "ACTIVE"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let response = post_json(app.clone(), "/api/projects", project_body("Banglow")).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let after = body_json(get(app, "/api/dashboard/stats").await).await;
    assert_eq!(before["activeProjects"], 1);
    assert_eq!(after["activeProjects"], 2);
    assert_eq!(after["totalProjects"], 4);
    assert_eq!(after["totalInvested"], 21_210_000 + 10_500_000);
}

#[tokio::test]
async fn test_investments_do_not_change_stats() {
    let app = seeded_app().await;
    let before = body_json(get(app.clone(), "/api/dashboard/stats").await).await;

    let response = post_json(
        app.clone(),
        "/api/investments",
        serde_json::json!({"projectId": 1, "amount": 750_000}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let after = body_json(get(app, "/api/dashboard/stats").await).await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_stats_match_on_sqlite_backend() {
    let app = sqlite_app().await;
    let json = body_json(get(app, "/api/dashboard/stats").await).await;
    assert_eq!(json["avgROI"], "0.0");
    assert_eq!(json["totalProjects"], 0);
}

// ---------------------------------------------------------------------------
// Testimonials
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_list_testimonials_returns_fixtures() {
    let app = seeded_app().await;
    let response = get(app, "/api/testimonials").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let list = json.as_array().unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list[0]["name"], "Ahmed Al-Rashid");
    assert_eq!(list[0]["rating"], 5);
    assert_eq!(list[0]["verified"], true);
}

#[tokio::test]
async fn test_create_testimonial_defaults_verified() {
    let app = memory_app();
    let response = post_json(
        app,
        "/api/testimonials",
        serde_json::json!({
            "name": "Ayesha Khan",
            "content": "Clear reporting every quarter.",
            "rating": 4
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["verified"], false);
    assert!(json["avatar"].is_null());
}

#[tokio::test]
async fn test_create_testimonial_with_bad_rating_returns_400() {
    let app = memory_app();
    for rating in [0, 6] {
        let response = post_json(
            app.clone(),
            "/api/testimonials",
            serde_json::json!({"name": "N", "content": "C", "rating": rating}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }

    let response = get(app, "/api/testimonials").await;
    assert!(body_json(response).await.as_array().unwrap().is_empty());
}
