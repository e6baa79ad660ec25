//! Repository for the `payments` table.

use opsdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::payment::{CreatePayment, Payment, UpdatePayment};

const COLUMNS: &str = "id, invoice_id, amount, paid_date, method, status, \
                       created_at, updated_at";

/// Provides CRUD operations for payments.
pub struct PaymentRepo;

impl PaymentRepo {
    /// Insert a new payment, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePayment) -> Result<Payment, sqlx::Error> {
        let query = format!(
            "INSERT INTO payments (invoice_id, amount, paid_date, method, status) \
             VALUES ($1, $2, $3, $4, COALESCE($5, 'Completed')) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(input.invoice_id)
            .bind(input.amount)
            .bind(input.paid_date)
            .bind(&input.method)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// List all payments ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Payment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM payments ORDER BY created_at DESC");
        sqlx::query_as::<_, Payment>(&query).fetch_all(pool).await
    }

    /// Merge the non-`None` fields of `input` into a payment.
    ///
    /// Returns `true` if a row was updated.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePayment,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE payments SET \
                invoice_id = COALESCE($2, invoice_id), \
                amount = COALESCE($3, amount), \
                paid_date = COALESCE($4, paid_date), \
                method = COALESCE($5, method), \
                status = COALESCE($6, status), \
                updated_at = now() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.invoice_id)
        .bind(input.amount)
        .bind(input.paid_date)
        .bind(&input.method)
        .bind(&input.status)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Hard-delete a payment by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM payments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
