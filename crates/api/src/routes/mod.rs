pub mod activities;
pub mod auth;
pub mod contacts;
pub mod employees;
pub mod expenses;
pub mod health;
pub mod invoices;
pub mod payments;
pub mod quotations;
pub mod rentals;
pub mod settings;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                 signup (public)
/// /auth/login                  login (public)
///
/// /invoices                    list, create, update
/// /invoices/{id}               delete
///
/// /activities                  recent feed (?limit, default 20)
///
/// /employees                   list, create, update
/// /employees/{id}              delete
///
/// /contacts                    list, create
/// /contacts/{id}               delete
///
/// /expenses                    list, create
/// /expenses/{id}               delete
///
/// /payments                    list, create, update
/// /payments/{id}               delete
///
/// /quotations                  list, create, update
/// /quotations/{id}             delete
///
/// /rentals/items               list, create
/// /rentals/items/{id}          delete
/// /rentals/agreements          list, create, update
///
/// /settings                    get, save
/// ```
///
/// Everything except `/auth/*` requires a Bearer access token; permission
/// checks happen per handler via `middleware::rbac`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/invoices", invoices::router())
        .nest("/activities", activities::router())
        .nest("/employees", employees::router())
        .nest("/contacts", contacts::router())
        .nest("/expenses", expenses::router())
        .nest("/payments", payments::router())
        .nest("/quotations", quotations::router())
        .nest("/rentals", rentals::router())
        .nest("/settings", settings::router())
}
