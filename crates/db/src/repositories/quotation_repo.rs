//! Repository for the `quotations` table.

use opsdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::quotation::{CreateQuotation, Quotation, UpdateQuotation};

const COLUMNS: &str = "id, client_name, company_name, quote_date, expiry_date, \
                       total_amount, status, created_at, updated_at";

/// Provides CRUD operations for quotations.
pub struct QuotationRepo;

impl QuotationRepo {
    /// Insert a new quotation, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateQuotation) -> Result<Quotation, sqlx::Error> {
        let query = format!(
            "INSERT INTO quotations \
                (client_name, company_name, quote_date, expiry_date, total_amount, status) \
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 'Draft')) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Quotation>(&query)
            .bind(&input.client_name)
            .bind(&input.company_name)
            .bind(input.quote_date)
            .bind(input.expiry_date)
            .bind(input.total_amount)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// List all quotations ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Quotation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM quotations ORDER BY created_at DESC");
        sqlx::query_as::<_, Quotation>(&query).fetch_all(pool).await
    }

    /// Merge the non-`None` fields of `input` into a quotation.
    ///
    /// Returns `true` if a row was updated.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateQuotation,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE quotations SET \
                client_name = COALESCE($2, client_name), \
                company_name = COALESCE($3, company_name), \
                quote_date = COALESCE($4, quote_date), \
                expiry_date = COALESCE($5, expiry_date), \
                total_amount = COALESCE($6, total_amount), \
                status = COALESCE($7, status), \
                updated_at = now() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.client_name)
        .bind(&input.company_name)
        .bind(input.quote_date)
        .bind(input.expiry_date)
        .bind(input.total_amount)
        .bind(&input.status)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Hard-delete a quotation by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM quotations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
