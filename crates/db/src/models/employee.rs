//! Employee entity model and DTOs.

use opsdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `employees` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Employee {
    pub id: DbId,
    /// Human-facing employee code (e.g. `EMP-001`).
    pub employee_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub department: String,
    pub status: String,
    pub join_date: Timestamp,
    pub salary: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new employee. `status` defaults to `Active`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEmployee {
    pub employee_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub department: String,
    pub status: Option<String>,
    pub join_date: Timestamp,
    pub salary: f64,
}

/// DTO for updating an existing employee. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEmployee {
    pub employee_code: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub status: Option<String>,
    pub join_date: Option<Timestamp>,
    pub salary: Option<f64>,
}
