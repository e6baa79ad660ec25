//! HTTP-level integration tests for company settings.

mod common;

use axum::http::StatusCode;
use common::{assert_status, get_auth, post_json_auth};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_returns_defaults_before_first_save(pool: PgPool) {
    let token = common::auth_token("employee");
    let response = get_auth(common::build_test_app(pool), "/api/v1/settings", &token).await;
    let json = assert_status(response, StatusCode::OK).await;

    assert_eq!(json["company_name"], "Compliance Corp");
    assert_eq!(json["currency"], "USD");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn save_merges_over_stored_values(pool: PgPool) {
    let token = common::auth_token("admin");

    // First save: only the company name; everything else keeps defaults.
    let body = serde_json::json!({ "company_name": "Initech" });
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/settings",
        &token,
        body,
    )
    .await;
    let json = assert_status(response, StatusCode::OK).await;
    assert_eq!(json["company_name"], "Initech");
    assert_eq!(json["currency"], "USD");

    // Second save: only the currency; the saved company name survives.
    let body = serde_json::json!({ "currency": "EUR" });
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/settings",
        &token,
        body,
    )
    .await;
    assert_status(response, StatusCode::OK).await;

    let response = get_auth(common::build_test_app(pool), "/api/v1/settings", &token).await;
    let json = assert_status(response, StatusCode::OK).await;
    assert_eq!(json["company_name"], "Initech");
    assert_eq!(json["currency"], "EUR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn save_requires_settings_permission(pool: PgPool) {
    let token = common::auth_token("employee");
    let body = serde_json::json!({ "company_name": "Initech" });
    let response =
        post_json_auth(common::build_test_app(pool), "/api/v1/settings", &token, body).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
