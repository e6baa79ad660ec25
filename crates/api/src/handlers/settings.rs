//! Handlers for the `/settings` resource.
//!
//! A single logical row; reads fall back to built-in defaults until the
//! first save, and saves merge over whatever is stored.

use axum::extract::State;
use axum::Json;
use opsdesk_core::permissions::Action;
use opsdesk_db::models::settings::{SettingsValues, UpdateSettings};
use opsdesk_db::repositories::SettingsRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac;
use crate::state::AppState;

/// GET /api/v1/settings
pub async fn get(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<SettingsValues>> {
    let values = SettingsRepo::get(&state.pool)
        .await?
        .map(SettingsValues::from)
        .unwrap_or_default();
    Ok(Json(values))
}

/// POST /api/v1/settings
///
/// Merge the provided fields over the stored values (or the defaults on
/// first save) and persist the result.
pub async fn save(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<UpdateSettings>,
) -> AppResult<Json<SettingsValues>> {
    rbac::require(&user, Action::ManageSettings)?;

    let base = SettingsRepo::get(&state.pool)
        .await?
        .map(SettingsValues::from)
        .unwrap_or_default();

    let merged = input.merge_into(base);
    let saved = SettingsRepo::upsert(&state.pool, &merged).await?;

    Ok(Json(SettingsValues::from(saved)))
}
