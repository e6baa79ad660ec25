//! Expense entity model and DTOs.

use opsdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `expenses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Expense {
    pub id: DbId,
    pub description: String,
    pub amount: f64,
    /// Free-form category (e.g. `Office`, `Travel`, `Software`).
    pub category: String,
    pub expense_date: Timestamp,
    pub status: String,
    pub receipt_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new expense. `status` defaults to `Pending`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateExpense {
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub expense_date: Timestamp,
    pub status: Option<String>,
    pub receipt_url: Option<String>,
}
