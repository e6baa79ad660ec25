//! Handlers for the `/contacts` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use opsdesk_core::activity::{ActivityAction, EntityKind};
use opsdesk_core::error::CoreError;
use opsdesk_core::permissions::Action;
use opsdesk_core::types::DbId;
use opsdesk_db::models::contact::{Contact, CreateContact};
use opsdesk_db::repositories::ContactRepo;

use crate::activity;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac;
use crate::state::AppState;

/// GET /api/v1/contacts
///
/// All contacts ordered by name.
pub async fn list(State(state): State<AppState>, _user: AuthUser) -> AppResult<Json<Vec<Contact>>> {
    let contacts = ContactRepo::list(&state.pool).await?;
    Ok(Json(contacts))
}

/// POST /api/v1/contacts
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateContact>,
) -> AppResult<(StatusCode, Json<Contact>)> {
    let contact = ContactRepo::create(&state.pool, &input).await?;

    activity::record(
        &state.pool,
        EntityKind::Contact,
        ActivityAction::Create,
        format!("Added contact: {} ({})", contact.name, contact.company),
    )
    .await;

    Ok((StatusCode::CREATED, Json(contact)))
}

/// DELETE /api/v1/contacts/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    rbac::require(&user, Action::DeleteRecords)?;

    let deleted = ContactRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Contact",
            id,
        }));
    }

    Ok(StatusCode::NO_CONTENT)
}
