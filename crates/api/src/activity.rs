//! Fire-and-forget activity feed appends.
//!
//! Activity logging is best-effort everywhere: a failed read or write is
//! warned to the operator log and swallowed, and never fails the request
//! that triggered it. There is deliberately no transaction around the
//! primary mutation and the log append, and the dedup check races with
//! concurrent writers; both near-simultaneous entries may land.

use chrono::Utc;
use opsdesk_core::activity::{is_duplicate, ActivityAction, EntityKind};
use opsdesk_db::models::activity::CreateActivity;
use opsdesk_db::repositories::ActivityRepo;
use opsdesk_db::DbPool;

/// Append an activity entry unconditionally (create/delete flows).
pub async fn record(pool: &DbPool, entity: EntityKind, action: ActivityAction, description: String) {
    let input = CreateActivity {
        entity: entity.as_str(),
        action: action.as_str(),
        description,
    };
    if let Err(err) = ActivityRepo::append(pool, &input, Utc::now()).await {
        tracing::warn!(error = %err, entity = input.entity, "Failed to append activity entry");
    }
}

/// Append an activity entry unless it duplicates the most recent one.
///
/// The lookback is exactly one entry: only the latest entry's description and
/// age are consulted. Used by update flows that carry an explicit
/// caller-supplied description.
pub async fn record_deduplicated(
    pool: &DbPool,
    entity: EntityKind,
    action: ActivityAction,
    description: String,
) {
    let now = Utc::now();

    let latest = match ActivityRepo::find_latest(pool).await {
        Ok(latest) => latest,
        Err(err) => {
            tracing::warn!(error = %err, "Failed to read latest activity entry; skipping append");
            return;
        }
    };

    let duplicate = is_duplicate(
        latest
            .as_ref()
            .map(|entry| (entry.description.as_str(), entry.created_at)),
        &description,
        now,
    );
    if duplicate {
        tracing::debug!(description = %description, "Suppressed duplicate activity entry");
        return;
    }

    let input = CreateActivity {
        entity: entity.as_str(),
        action: action.as_str(),
        description,
    };
    if let Err(err) = ActivityRepo::append(pool, &input, now).await {
        tracing::warn!(error = %err, entity = input.entity, "Failed to append activity entry");
    }
}
