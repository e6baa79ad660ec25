//! Handlers for the rental inventory (`/rentals/items`) and agreements
//! (`/rentals/agreements`) resources.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use opsdesk_core::activity::{ActivityAction, EntityKind};
use opsdesk_core::error::CoreError;
use opsdesk_core::permissions::Action;
use opsdesk_core::types::{DbId, Timestamp};
use opsdesk_db::models::rental::{
    CreateRentalAgreement, CreateRentalItem, RentalAgreement, RentalItem, UpdateRentalAgreement,
};
use opsdesk_db::repositories::{RentalAgreementRepo, RentalItemRepo};
use serde::{Deserialize, Serialize};

use crate::activity;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Rental items
// ---------------------------------------------------------------------------

/// GET /api/v1/rentals/items
pub async fn list_items(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<RentalItem>>> {
    let items = RentalItemRepo::list(&state.pool).await?;
    Ok(Json(items))
}

/// POST /api/v1/rentals/items
pub async fn create_item(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateRentalItem>,
) -> AppResult<(StatusCode, Json<RentalItem>)> {
    let item = RentalItemRepo::create(&state.pool, &input).await?;

    activity::record(
        &state.pool,
        EntityKind::RentalItem,
        ActivityAction::Create,
        format!("Added rental item: {}", item.name),
    )
    .await;

    Ok((StatusCode::CREATED, Json(item)))
}

/// DELETE /api/v1/rentals/items/{id}
pub async fn delete_item(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    rbac::require(&user, Action::DeleteRecords)?;

    let deleted = RentalItemRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "RentalItem",
            id,
        }));
    }

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Rental agreements
// ---------------------------------------------------------------------------

/// Request body for `PUT /rentals/agreements`. Allow-listed fields plus the
/// body id. Client and item references are fixed at creation.
#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateRentalAgreementRequest {
    #[serde(skip_serializing)]
    pub id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// GET /api/v1/rentals/agreements
pub async fn list_agreements(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<RentalAgreement>>> {
    let agreements = RentalAgreementRepo::list(&state.pool).await?;
    Ok(Json(agreements))
}

/// POST /api/v1/rentals/agreements
///
/// New agreements always start `Active` regardless of caller input.
pub async fn create_agreement(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateRentalAgreement>,
) -> AppResult<(StatusCode, Json<RentalAgreement>)> {
    let agreement = RentalAgreementRepo::create(&state.pool, &input).await?;

    activity::record(
        &state.pool,
        EntityKind::RentalAgreement,
        ActivityAction::Create,
        format!(
            "New rental agreement for {}: {}",
            agreement.client_name, agreement.item_name
        ),
    )
    .await;

    Ok((StatusCode::CREATED, Json(agreement)))
}

/// PUT /api/v1/rentals/agreements
///
/// Echoes the identifier plus the submitted fields.
pub async fn update_agreement(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<UpdateRentalAgreementRequest>,
) -> AppResult<Json<serde_json::Value>> {
    let id = input
        .id
        .ok_or_else(|| AppError::BadRequest("ID is required".into()))?;

    let mut body = serde_json::to_value(&input)
        .map_err(|e| AppError::InternalError(format!("Response serialization error: {e}")))?;

    let fields = UpdateRentalAgreement {
        start_date: input.start_date,
        end_date: input.end_date,
        daily_rate: input.daily_rate,
        total_cost: input.total_cost,
        status: input.status,
    };

    let updated = RentalAgreementRepo::update(&state.pool, id, &fields).await?;
    if !updated {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "RentalAgreement",
            id,
        }));
    }

    if let Some(obj) = body.as_object_mut() {
        obj.insert("id".into(), serde_json::json!(id));
    }
    Ok(Json(body))
}
