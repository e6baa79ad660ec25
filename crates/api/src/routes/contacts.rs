//! Route definitions for contacts.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::contacts;
use crate::state::AppState;

/// Contact routes mounted at `/contacts`.
///
/// ```text
/// GET    /       -> list (name ASC)
/// POST   /       -> create
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(contacts::list).post(contacts::create))
        .route("/{id}", delete(contacts::delete))
}
