//! Payment entity model and DTOs.

use opsdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `payments` table.
///
/// `invoice_id` is a soft reference; the invoice may have been deleted
/// independently, so there is no foreign key.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Payment {
    pub id: DbId,
    pub invoice_id: Option<DbId>,
    pub amount: f64,
    pub paid_date: Timestamp,
    /// One of `Bank Transfer`, `Credit Card`, `Cash`, `Cheque`.
    pub method: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new payment. `status` defaults to `Completed`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePayment {
    pub invoice_id: Option<DbId>,
    pub amount: f64,
    pub paid_date: Timestamp,
    pub method: String,
    pub status: Option<String>,
}

/// DTO for updating an existing payment. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePayment {
    pub invoice_id: Option<DbId>,
    pub amount: Option<f64>,
    pub paid_date: Option<Timestamp>,
    pub method: Option<String>,
    pub status: Option<String>,
}
