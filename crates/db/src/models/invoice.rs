//! Invoice entity model and DTOs.

use opsdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `invoices` table.
///
/// `report_status` is the persisted value only; the effective value is
/// derived on the read path with `opsdesk_core::reporting`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Invoice {
    pub id: DbId,
    pub client_name: String,
    pub company_name: String,
    pub issue_date: Timestamp,
    pub due_date: Timestamp,
    pub amount: f64,
    pub status: String,
    pub report_status: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new invoice. `status` defaults to `Draft`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInvoice {
    pub client_name: String,
    pub company_name: String,
    pub issue_date: Timestamp,
    pub due_date: Timestamp,
    pub amount: f64,
    pub status: Option<String>,
    pub report_status: Option<String>,
}

/// DTO for updating an existing invoice. All fields are optional; unknown
/// fields are rejected at the API boundary.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateInvoice {
    pub client_name: Option<String>,
    pub company_name: Option<String>,
    pub issue_date: Option<Timestamp>,
    pub due_date: Option<Timestamp>,
    pub amount: Option<f64>,
    pub status: Option<String>,
    pub report_status: Option<String>,
}
