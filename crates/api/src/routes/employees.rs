//! Route definitions for employees.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::employees;
use crate::state::AppState;

/// Employee routes mounted at `/employees`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// PUT    /       -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(employees::list)
                .post(employees::create)
                .put(employees::update),
        )
        .route("/{id}", delete(employees::delete))
}
