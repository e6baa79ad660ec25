//! Quotation entity model and DTOs.

use opsdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `quotations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Quotation {
    pub id: DbId,
    pub client_name: String,
    pub company_name: String,
    pub quote_date: Timestamp,
    pub expiry_date: Timestamp,
    pub total_amount: f64,
    /// One of `Draft`, `Sent`, `Accepted`, `Rejected`.
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new quotation. `status` defaults to `Draft`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuotation {
    pub client_name: String,
    pub company_name: String,
    pub quote_date: Timestamp,
    pub expiry_date: Timestamp,
    pub total_amount: f64,
    pub status: Option<String>,
}

/// DTO for updating an existing quotation. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateQuotation {
    pub client_name: Option<String>,
    pub company_name: Option<String>,
    pub quote_date: Option<Timestamp>,
    pub expiry_date: Option<Timestamp>,
    pub total_amount: Option<f64>,
    pub status: Option<String>,
}
