//! Handlers for the `/activities` feed.

use axum::extract::{Query, State};
use axum::Json;
use opsdesk_db::models::activity::Activity;
use opsdesk_db::repositories::ActivityRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Default number of entries in the dashboard feed.
const DEFAULT_LIMIT: i64 = 20;
/// Hard cap on requested feed size.
const MAX_LIMIT: i64 = 100;

/// Query parameters for the activity feed.
#[derive(Debug, Deserialize)]
pub struct FeedParams {
    pub limit: Option<i64>,
}

/// GET /api/v1/activities
///
/// The most recent entries, newest first.
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<FeedParams>,
) -> AppResult<Json<Vec<Activity>>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let entries = ActivityRepo::list_recent(&state.pool, limit).await?;
    Ok(Json(entries))
}
