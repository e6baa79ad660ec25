//! Route definitions for expenses.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::expenses;
use crate::state::AppState;

/// Expense routes mounted at `/expenses`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(expenses::list).post(expenses::create))
        .route("/{id}", delete(expenses::delete))
}
