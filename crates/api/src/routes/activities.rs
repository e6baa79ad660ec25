//! Route definitions for the activity feed.

use axum::routing::get;
use axum::Router;

use crate::handlers::activities;
use crate::state::AppState;

/// Activity feed routes mounted at `/activities`.
///
/// ```text
/// GET /  -> list (?limit, default 20)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(activities::list))
}
