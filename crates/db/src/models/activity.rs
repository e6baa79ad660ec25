//! Activity feed entity model and DTOs.
//!
//! Activity entries are immutable once created (no `updated_at`).

use opsdesk_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A single activity feed entry. Append-only.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Activity {
    pub id: DbId,
    pub entity: String,
    pub action: String,
    pub description: String,
    pub timestamp: Timestamp,
    pub created_at: Timestamp,
}

/// DTO for appending a new activity entry.
///
/// `timestamp` and `created_at` are bound explicitly from the caller's clock
/// so the deduplication window compares against the same time source.
#[derive(Debug, Clone)]
pub struct CreateActivity {
    pub entity: &'static str,
    pub action: &'static str,
    pub description: String,
}
