//! Route definitions for rental inventory and agreements.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::rentals;
use crate::state::AppState;

/// Rental routes mounted at `/rentals`.
///
/// ```text
/// GET    /items            -> list_items (name ASC)
/// POST   /items            -> create_item
/// DELETE /items/{id}       -> delete_item
/// GET    /agreements       -> list_agreements
/// POST   /agreements       -> create_agreement (always starts Active)
/// PUT    /agreements       -> update_agreement
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/items", get(rentals::list_items).post(rentals::create_item))
        .route("/items/{id}", delete(rentals::delete_item))
        .route(
            "/agreements",
            get(rentals::list_agreements)
                .post(rentals::create_agreement)
                .put(rentals::update_agreement),
        )
}
