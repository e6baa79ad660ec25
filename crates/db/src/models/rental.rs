//! Rental inventory and agreement models and DTOs.

use opsdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `rental_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RentalItem {
    pub id: DbId,
    pub name: String,
    pub daily_rate: f64,
    pub quantity: i32,
    pub description: Option<String>,
    /// One of `Available`, `Out of Stock`.
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new rental item. `status` defaults to `Available`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRentalItem {
    pub name: String,
    pub daily_rate: f64,
    pub quantity: i32,
    pub description: Option<String>,
    pub status: Option<String>,
}

/// A row from the `rental_agreements` table.
///
/// Client and item are stored as soft references plus denormalized names,
/// document-store style; there are no foreign keys.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RentalAgreement {
    pub id: DbId,
    pub client_id: DbId,
    pub client_name: String,
    pub item_id: DbId,
    pub item_name: String,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub daily_rate: f64,
    pub total_cost: f64,
    /// One of `Active`, `Returned`, `Overdue`.
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new rental agreement. New agreements always start
/// `Active` regardless of caller input.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRentalAgreement {
    pub client_id: DbId,
    pub client_name: String,
    pub item_id: DbId,
    pub item_name: String,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub daily_rate: f64,
    pub total_cost: f64,
}

/// DTO for updating an existing rental agreement. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRentalAgreement {
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub daily_rate: Option<f64>,
    pub total_cost: Option<f64>,
    pub status: Option<String>,
}
