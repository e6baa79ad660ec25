//! Route definitions for payments.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::payments;
use crate::state::AppState;

/// Payment routes mounted at `/payments`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create (marks the referenced invoice paid)
/// PUT    /       -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(payments::list)
                .post(payments::create)
                .put(payments::update),
        )
        .route("/{id}", delete(payments::delete))
}
