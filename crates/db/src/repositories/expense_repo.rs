//! Repository for the `expenses` table.

use opsdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::expense::{CreateExpense, Expense};

const COLUMNS: &str = "id, description, amount, category, expense_date, status, \
                       receipt_url, created_at, updated_at";

/// Provides CRUD operations for expenses.
pub struct ExpenseRepo;

impl ExpenseRepo {
    /// Insert a new expense, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateExpense) -> Result<Expense, sqlx::Error> {
        let query = format!(
            "INSERT INTO expenses \
                (description, amount, category, expense_date, status, receipt_url) \
             VALUES ($1, $2, $3, $4, COALESCE($5, 'Pending'), $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Expense>(&query)
            .bind(&input.description)
            .bind(input.amount)
            .bind(&input.category)
            .bind(input.expense_date)
            .bind(&input.status)
            .bind(&input.receipt_url)
            .fetch_one(pool)
            .await
    }

    /// List all expenses ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Expense>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM expenses ORDER BY created_at DESC");
        sqlx::query_as::<_, Expense>(&query).fetch_all(pool).await
    }

    /// Hard-delete an expense by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
