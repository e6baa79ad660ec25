//! Integration tests for the repository layer against a real database:
//! invoice CRUD, partial updates, list ordering, and the payment-driven
//! status flip.

use assert_matches::assert_matches;
use chrono::{Duration, Utc};
use opsdesk_db::models::invoice::{CreateInvoice, UpdateInvoice};
use opsdesk_db::repositories::InvoiceRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_invoice(client: &str, status: Option<&str>) -> CreateInvoice {
    CreateInvoice {
        client_name: client.to_string(),
        company_name: format!("{client} Ltd"),
        issue_date: Utc::now(),
        due_date: Utc::now() + Duration::days(30),
        amount: 1250.0,
        status: status.map(str::to_string),
        report_status: None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_defaults_to_draft(pool: PgPool) {
    let invoice = InvoiceRepo::create(&pool, &new_invoice("Acme", None))
        .await
        .unwrap();

    assert_eq!(invoice.status, "Draft");
    assert_eq!(invoice.report_status, None);
    assert_eq!(invoice.client_name, "Acme");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_is_newest_first(pool: PgPool) {
    InvoiceRepo::create(&pool, &new_invoice("First", None))
        .await
        .unwrap();
    InvoiceRepo::create(&pool, &new_invoice("Second", None))
        .await
        .unwrap();

    // Separate the created_at values; same-transaction now() would tie.
    sqlx::query("UPDATE invoices SET created_at = created_at - interval '1 minute' WHERE client_name = 'First'")
        .execute(&pool)
        .await
        .unwrap();

    let invoices = InvoiceRepo::list(&pool).await.unwrap();
    assert_eq!(invoices.len(), 2);
    assert_eq!(invoices[0].client_name, "Second");
    assert_eq!(invoices[1].client_name, "First");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn partial_update_preserves_other_fields(pool: PgPool) {
    let invoice = InvoiceRepo::create(&pool, &new_invoice("Acme", Some("Sent")))
        .await
        .unwrap();

    let updated = InvoiceRepo::update(
        &pool,
        invoice.id,
        &UpdateInvoice {
            report_status: Some("Pending".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert!(updated);

    let reloaded = InvoiceRepo::find_by_id(&pool, invoice.id)
        .await
        .unwrap()
        .expect("invoice must still exist");
    assert_eq!(reloaded.status, "Sent");
    assert_eq!(reloaded.report_status.as_deref(), Some("Pending"));
    assert_eq!(reloaded.client_name, "Acme");
    assert!(reloaded.updated_at >= invoice.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_missing_row_reports_false(pool: PgPool) {
    let updated = InvoiceRepo::update(
        &pool,
        uuid::Uuid::new_v4(),
        &UpdateInvoice {
            amount: Some(10.0),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert!(!updated);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn mark_paid_flips_status(pool: PgPool) {
    let invoice = InvoiceRepo::create(&pool, &new_invoice("Acme", Some("Sent")))
        .await
        .unwrap();

    let flipped = InvoiceRepo::mark_paid(&pool, invoice.id).await.unwrap();
    assert!(flipped);

    let reloaded = InvoiceRepo::find_by_id(&pool, invoice.id).await.unwrap();
    assert_matches!(reloaded, Some(inv) if inv.status == "Paid");

    // A second flip is idempotent.
    assert!(InvoiceRepo::mark_paid(&pool, invoice.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_removes_the_row(pool: PgPool) {
    let invoice = InvoiceRepo::create(&pool, &new_invoice("Acme", None))
        .await
        .unwrap();

    assert!(InvoiceRepo::delete(&pool, invoice.id).await.unwrap());
    assert!(!InvoiceRepo::delete(&pool, invoice.id).await.unwrap());

    let reloaded = InvoiceRepo::find_by_id(&pool, invoice.id).await.unwrap();
    assert_matches!(reloaded, None);
}
