//! Route definitions for quotations.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::quotations;
use crate::state::AppState;

/// Quotation routes mounted at `/quotations`.
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
            get(quotations::list)
                .post(quotations::create)
                .put(quotations::update),
        )
        .route("/{id}", delete(quotations::delete))
}
