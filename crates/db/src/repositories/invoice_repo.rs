//! Repository for the `invoices` table.

use opsdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::invoice::{CreateInvoice, Invoice, UpdateInvoice};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, client_name, company_name, issue_date, due_date, \
                       amount, status, report_status, created_at, updated_at";

/// Provides CRUD operations for invoices.
pub struct InvoiceRepo;

impl InvoiceRepo {
    /// Insert a new invoice, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateInvoice) -> Result<Invoice, sqlx::Error> {
        let query = format!(
            "INSERT INTO invoices \
                (client_name, company_name, issue_date, due_date, amount, status, report_status) \
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 'Draft'), $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Invoice>(&query)
            .bind(&input.client_name)
            .bind(&input.company_name)
            .bind(input.issue_date)
            .bind(input.due_date)
            .bind(input.amount)
            .bind(&input.status)
            .bind(&input.report_status)
            .fetch_one(pool)
            .await
    }

    /// Find an invoice by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Invoice>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM invoices WHERE id = $1");
        sqlx::query_as::<_, Invoice>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all invoices ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Invoice>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM invoices ORDER BY created_at DESC");
        sqlx::query_as::<_, Invoice>(&query).fetch_all(pool).await
    }

    /// Merge the non-`None` fields of `input` into an invoice and bump
    /// `updated_at`.
    ///
    /// Returns `true` if a row was updated. Deliberately does not read the
    /// row back: callers echo the submitted fields instead.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInvoice,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE invoices SET \
                client_name = COALESCE($2, client_name), \
                company_name = COALESCE($3, company_name), \
                issue_date = COALESCE($4, issue_date), \
                due_date = COALESCE($5, due_date), \
                amount = COALESCE($6, amount), \
                status = COALESCE($7, status), \
                report_status = COALESCE($8, report_status), \
                updated_at = now() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.client_name)
        .bind(&input.company_name)
        .bind(input.issue_date)
        .bind(input.due_date)
        .bind(input.amount)
        .bind(&input.status)
        .bind(&input.report_status)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Mark an invoice as paid (used by the payment-creation flow).
    ///
    /// Returns `true` if the invoice existed.
    pub async fn mark_paid(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE invoices SET status = 'Paid', updated_at = now() WHERE id = $1")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Hard-delete an invoice by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
