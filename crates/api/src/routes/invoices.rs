//! Route definitions for invoices.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::invoices;
use crate::state::AppState;

/// Invoice routes mounted at `/invoices`.
///
/// The update endpoint is collection-level: the id travels in the body so a
/// missing id is a 400, not a routing miss.
///
/// ```text
/// GET    /       -> list (effective report status included)
/// POST   /       -> create
/// PUT    /       -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(invoices::list)
                .post(invoices::create)
                .put(invoices::update),
        )
        .route("/{id}", delete(invoices::delete))
}
