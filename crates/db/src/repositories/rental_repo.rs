//! Repositories for the `rental_items` and `rental_agreements` tables.

use opsdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::rental::{
    CreateRentalAgreement, CreateRentalItem, RentalAgreement, RentalItem, UpdateRentalAgreement,
};

const ITEM_COLUMNS: &str = "id, name, daily_rate, quantity, description, status, \
                            created_at, updated_at";

const AGREEMENT_COLUMNS: &str = "id, client_id, client_name, item_id, item_name, \
                                 start_date, end_date, daily_rate, total_cost, status, \
                                 created_at, updated_at";

/// Provides CRUD operations for rental inventory items.
pub struct RentalItemRepo;

impl RentalItemRepo {
    /// Insert a new rental item, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateRentalItem) -> Result<RentalItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO rental_items (name, daily_rate, quantity, description, status) \
             VALUES ($1, $2, $3, $4, COALESCE($5, 'Available')) \
             RETURNING {ITEM_COLUMNS}"
        );
        sqlx::query_as::<_, RentalItem>(&query)
            .bind(&input.name)
            .bind(input.daily_rate)
            .bind(input.quantity)
            .bind(&input.description)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// List all rental items ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<RentalItem>, sqlx::Error> {
        let query = format!("SELECT {ITEM_COLUMNS} FROM rental_items ORDER BY name ASC");
        sqlx::query_as::<_, RentalItem>(&query).fetch_all(pool).await
    }

    /// Hard-delete a rental item by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM rental_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Provides CRUD operations for rental agreements.
pub struct RentalAgreementRepo;

impl RentalAgreementRepo {
    /// Insert a new agreement. New agreements always start `Active`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateRentalAgreement,
    ) -> Result<RentalAgreement, sqlx::Error> {
        let query = format!(
            "INSERT INTO rental_agreements \
                (client_id, client_name, item_id, item_name, start_date, end_date, \
                 daily_rate, total_cost, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 'Active') \
             RETURNING {AGREEMENT_COLUMNS}"
        );
        sqlx::query_as::<_, RentalAgreement>(&query)
            .bind(input.client_id)
            .bind(&input.client_name)
            .bind(input.item_id)
            .bind(&input.item_name)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.daily_rate)
            .bind(input.total_cost)
            .fetch_one(pool)
            .await
    }

    /// List all agreements ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<RentalAgreement>, sqlx::Error> {
        let query =
            format!("SELECT {AGREEMENT_COLUMNS} FROM rental_agreements ORDER BY created_at DESC");
        sqlx::query_as::<_, RentalAgreement>(&query)
            .fetch_all(pool)
            .await
    }

    /// Merge the non-`None` fields of `input` into an agreement.
    ///
    /// Returns `true` if a row was updated.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRentalAgreement,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE rental_agreements SET \
                start_date = COALESCE($2, start_date), \
                end_date = COALESCE($3, end_date), \
                daily_rate = COALESCE($4, daily_rate), \
                total_cost = COALESCE($5, total_cost), \
                status = COALESCE($6, status), \
                updated_at = now() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(input.daily_rate)
        .bind(input.total_cost)
        .bind(&input.status)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
