//! Repository for the append-only `activities` table.

use opsdesk_core::types::Timestamp;
use sqlx::PgPool;

use crate::models::activity::{Activity, CreateActivity};

const COLUMNS: &str = "id, entity, action, description, timestamp, created_at";

/// Provides append and query operations for the activity feed.
///
/// There are no update or delete methods: the feed is append-only.
pub struct ActivityRepo;

impl ActivityRepo {
    /// Append a new entry. Both `timestamp` and `created_at` are bound from
    /// the caller's clock so the dedup window compares like with like.
    pub async fn append(
        pool: &PgPool,
        input: &CreateActivity,
        now: Timestamp,
    ) -> Result<Activity, sqlx::Error> {
        let query = format!(
            "INSERT INTO activities (entity, action, description, timestamp, created_at) \
             VALUES ($1, $2, $3, $4, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(input.entity)
            .bind(input.action)
            .bind(&input.description)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Fetch the single most recently created entry, if any.
    ///
    /// This is the entire lookback of the deduplication check.
    pub async fn find_latest(pool: &PgPool) -> Result<Option<Activity>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM activities ORDER BY created_at DESC LIMIT 1"
        );
        sqlx::query_as::<_, Activity>(&query)
            .fetch_optional(pool)
            .await
    }

    /// List the most recent entries, newest first.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<Activity>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM activities ORDER BY created_at DESC LIMIT $1"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Count all entries (used by tests and the dashboard).
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*)::BIGINT FROM activities")
            .fetch_one(pool)
            .await
    }
}
