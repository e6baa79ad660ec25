//! HTTP-level integration tests for the invoice lifecycle: report-status
//! derivation on the listing, the conditional + deduplicated activity
//! logging on update, and the update contract itself.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{assert_status, delete_auth, get_auth, post_json_auth, put_json_auth};
use opsdesk_db::models::activity::CreateActivity;
use opsdesk_db::models::invoice::{CreateInvoice, Invoice};
use opsdesk_db::repositories::{ActivityRepo, InvoiceRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Seed an invoice directly through the repository (no activity entry).
async fn seed_invoice(pool: &PgPool, client: &str, status: &str) -> Invoice {
    InvoiceRepo::create(
        pool,
        &CreateInvoice {
            client_name: client.to_string(),
            company_name: format!("{client} Ltd"),
            issue_date: Utc::now(),
            due_date: Utc::now() + Duration::days(30),
            amount: 900.0,
            status: Some(status.to_string()),
            report_status: None,
        },
    )
    .await
    .expect("invoice creation should succeed")
}

/// Age every stored activity entry by `seconds`, pushing it out of the
/// dedup window without sleeping in the test.
async fn age_activities(pool: &PgPool, seconds: i64) {
    sqlx::query(&format!(
        "UPDATE activities SET created_at = created_at - interval '{seconds} seconds', \
         timestamp = timestamp - interval '{seconds} seconds'"
    ))
    .execute(pool)
    .await
    .unwrap();
}

// ---------------------------------------------------------------------------
// Report-status derivation on the listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn listing_derives_report_status(pool: PgPool) {
    seed_invoice(&pool, "Paid Client", "Paid").await;
    seed_invoice(&pool, "Draft Client", "Draft").await;

    let token = common::auth_token("admin");
    let response = get_auth(common::build_test_app(pool), "/api/v1/invoices", &token).await;
    let json = assert_status(response, StatusCode::OK).await;

    let invoices = json.as_array().unwrap();
    assert_eq!(invoices.len(), 2);

    for invoice in invoices {
        match invoice["status"].as_str().unwrap() {
            "Paid" => assert_eq!(invoice["report_status"], "Released"),
            "Draft" => assert_eq!(invoice["report_status"], "Pending"),
            other => panic!("unexpected status {other}"),
        }
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn persisted_report_status_wins_over_derivation(pool: PgPool) {
    let invoice = seed_invoice(&pool, "Acme", "Paid").await;

    let token = common::auth_token("admin");
    let body = serde_json::json!({ "id": invoice.id, "report_status": "Pending" });
    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/invoices",
        &token,
        body,
    )
    .await;
    assert_status(response, StatusCode::OK).await;

    let response = get_auth(common::build_test_app(pool), "/api/v1/invoices", &token).await;
    let json = assert_status(response, StatusCode::OK).await;
    assert_eq!(json[0]["status"], "Paid");
    assert_eq!(json[0]["report_status"], "Pending");
}

// ---------------------------------------------------------------------------
// Update contract
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_without_id_is_rejected_without_mutation(pool: PgPool) {
    let invoice = seed_invoice(&pool, "Acme", "Sent").await;

    let token = common::auth_token("admin");
    let body = serde_json::json!({ "client_name": "Changed" });
    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/invoices",
        &token,
        body,
    )
    .await;
    let json = assert_status(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(json["error"], "ID is required");

    let reloaded = InvoiceRepo::find_by_id(&pool, invoice.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.client_name, "Acme");
    assert_eq!(ActivityRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_rejects_unknown_fields(pool: PgPool) {
    let invoice = seed_invoice(&pool, "Acme", "Sent").await;

    let token = common::auth_token("admin");
    let body = serde_json::json!({ "id": invoice.id, "injected_field": "boom" });
    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/invoices",
        &token,
        body,
    )
    .await;
    assert!(
        response.status().is_client_error(),
        "unknown fields must be rejected, got {}",
        response.status()
    );

    let reloaded = InvoiceRepo::find_by_id(&pool, invoice.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.client_name, "Acme");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_echoes_id_plus_submitted_fields_only(pool: PgPool) {
    let invoice = seed_invoice(&pool, "Acme", "Sent").await;

    let token = common::auth_token("admin");
    let body = serde_json::json!({
        "id": invoice.id,
        "report_status": "Pending",
        "activity_description": "Changed report status to Pending",
    });
    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/invoices",
        &token,
        body,
    )
    .await;
    let json = assert_status(response, StatusCode::OK).await;

    // The echo is the id plus the submitted fields; nothing is read back and
    // the logging instruction is not part of the payload.
    assert_eq!(json["id"], serde_json::json!(invoice.id));
    assert_eq!(json["report_status"], "Pending");
    assert!(json.get("client_name").is_none());
    assert!(json.get("activity_description").is_none());

    let reloaded = InvoiceRepo::find_by_id(&pool, invoice.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.report_status.as_deref(), Some("Pending"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_missing_invoice_is_not_found(pool: PgPool) {
    let token = common::auth_token("admin");
    let body = serde_json::json!({ "id": uuid::Uuid::new_v4(), "status": "Sent" });
    let response = put_json_auth(
        common::build_test_app(pool),
        "/api/v1/invoices",
        &token,
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Conditional + deduplicated activity logging
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_without_description_never_logs(pool: PgPool) {
    let invoice = seed_invoice(&pool, "Acme", "Sent").await;

    let token = common::auth_token("admin");
    let body = serde_json::json!({ "id": invoice.id, "status": "Overdue", "amount": 4200.0 });
    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/invoices",
        &token,
        body,
    )
    .await;
    assert_status(response, StatusCode::OK).await;

    assert_eq!(ActivityRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn repeated_description_within_window_logs_once(pool: PgPool) {
    let invoice = seed_invoice(&pool, "Acme", "Paid").await;
    let token = common::auth_token("admin");

    // The report page toggle fires the same PUT twice in quick succession.
    for _ in 0..2 {
        let body = serde_json::json!({
            "id": invoice.id,
            "report_status": "Pending",
            "activity_description": format!("Changed report status to Pending for invoice {}", invoice.id),
        });
        let response = put_json_auth(
            common::build_test_app(pool.clone()),
            "/api/v1/invoices",
            &token,
            body,
        )
        .await;
        assert_status(response, StatusCode::OK).await;
    }

    assert_eq!(ActivityRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn same_description_after_window_logs_again(pool: PgPool) {
    let invoice = seed_invoice(&pool, "Acme", "Paid").await;
    let token = common::auth_token("admin");
    let description = format!("Changed report status to Pending for invoice {}", invoice.id);

    let body = serde_json::json!({
        "id": invoice.id,
        "report_status": "Pending",
        "activity_description": description,
    });
    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/invoices",
        &token,
        body.clone(),
    )
    .await;
    assert_status(response, StatusCode::OK).await;

    // Push the entry out of the 5-second window, then repeat the same PUT.
    age_activities(&pool, 6).await;

    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/invoices",
        &token,
        body,
    )
    .await;
    assert_status(response, StatusCode::OK).await;

    assert_eq!(ActivityRepo::count(&pool).await.unwrap(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn lookback_is_one_entry_only(pool: PgPool) {
    let invoice = seed_invoice(&pool, "Acme", "Paid").await;
    let token = common::auth_token("admin");
    let description = format!("Changed report status to Pending for invoice {}", invoice.id);

    let body = serde_json::json!({
        "id": invoice.id,
        "report_status": "Pending",
        "activity_description": description,
    });
    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/invoices",
        &token,
        body.clone(),
    )
    .await;
    assert_status(response, StatusCode::OK).await;

    // An unrelated entry lands in between; the check only sees this one.
    ActivityRepo::append(
        &pool,
        &CreateActivity {
            entity: "employee",
            action: "update",
            description: "Updated employee records".to_string(),
        },
        Utc::now(),
    )
    .await
    .unwrap();

    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/invoices",
        &token,
        body,
    )
    .await;
    assert_status(response, StatusCode::OK).await;

    // Both identical descriptions survive: 1 + 1 unrelated + 1 repeat.
    assert_eq!(ActivityRepo::count(&pool).await.unwrap(), 3);
}

// ---------------------------------------------------------------------------
// Create / delete flows
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_logs_and_rejects_negative_amounts(pool: PgPool) {
    let token = common::auth_token("admin");

    let body = serde_json::json!({
        "client_name": "Acme",
        "company_name": "Acme Ltd",
        "issue_date": Utc::now(),
        "due_date": Utc::now() + Duration::days(14),
        "amount": -5.0,
    });
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/invoices",
        &token,
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = serde_json::json!({
        "client_name": "Acme",
        "company_name": "Acme Ltd",
        "issue_date": Utc::now(),
        "due_date": Utc::now() + Duration::days(14),
        "amount": 1500.0,
        "status": "Sent",
    });
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/invoices",
        &token,
        body,
    )
    .await;
    let json = assert_status(response, StatusCode::CREATED).await;
    assert_eq!(json["status"], "Sent");

    let latest = ActivityRepo::find_latest(&pool).await.unwrap().unwrap();
    assert_eq!(latest.description, "Created invoice for Acme");
    assert_eq!(latest.action, "create");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_is_super_admin_only(pool: PgPool) {
    let invoice = seed_invoice(&pool, "Acme", "Sent").await;

    let admin = common::auth_token("admin");
    let response = delete_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/invoices/{}", invoice.id),
        &admin,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let super_admin = common::auth_token("super_admin");
    let response = delete_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/invoices/{}", invoice.id),
        &super_admin,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert!(InvoiceRepo::find_by_id(&pool, invoice.id)
        .await
        .unwrap()
        .is_none());

    let latest = ActivityRepo::find_latest(&pool).await.unwrap().unwrap();
    assert_eq!(latest.description, format!("Deleted invoice {}", invoice.id));
}
