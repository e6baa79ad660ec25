//! Route definitions for company settings.

use axum::routing::get;
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

/// Settings routes mounted at `/settings`.
///
/// ```text
/// GET  /  -> get (defaults until first save)
/// POST /  -> save (merge over stored values)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(settings::get).post(settings::save))
}
