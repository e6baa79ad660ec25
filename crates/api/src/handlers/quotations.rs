//! Handlers for the `/quotations` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use opsdesk_core::activity::{ActivityAction, EntityKind};
use opsdesk_core::error::CoreError;
use opsdesk_core::permissions::Action;
use opsdesk_core::types::{DbId, Timestamp};
use opsdesk_db::models::quotation::{CreateQuotation, Quotation, UpdateQuotation};
use opsdesk_db::repositories::QuotationRepo;
use serde::{Deserialize, Serialize};

use crate::activity;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac;
use crate::state::AppState;

/// Request body for `PUT /quotations`. Allow-listed fields plus the body id.
#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateQuotationRequest {
    #[serde(skip_serializing)]
    pub id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// GET /api/v1/quotations
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<Quotation>>> {
    rbac::require(&user, Action::ViewQuotations)?;

    let quotations = QuotationRepo::list(&state.pool).await?;
    Ok(Json(quotations))
}

/// POST /api/v1/quotations
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateQuotation>,
) -> AppResult<(StatusCode, Json<Quotation>)> {
    let quotation = QuotationRepo::create(&state.pool, &input).await?;

    activity::record(
        &state.pool,
        EntityKind::Quotation,
        ActivityAction::Create,
        format!("Created quotation for {}", quotation.client_name),
    )
    .await;

    Ok((StatusCode::CREATED, Json(quotation)))
}

/// PUT /api/v1/quotations
///
/// Echoes the identifier plus the submitted fields. Quotation updates do not
/// feed the activity dashboard; only add and delete events do.
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<UpdateQuotationRequest>,
) -> AppResult<Json<serde_json::Value>> {
    let id = input
        .id
        .ok_or_else(|| AppError::BadRequest("ID is required".into()))?;

    let mut body = serde_json::to_value(&input)
        .map_err(|e| AppError::InternalError(format!("Response serialization error: {e}")))?;

    let fields = UpdateQuotation {
        client_name: input.client_name,
        company_name: input.company_name,
        quote_date: input.quote_date,
        expiry_date: input.expiry_date,
        total_amount: input.total_amount,
        status: input.status,
    };

    let updated = QuotationRepo::update(&state.pool, id, &fields).await?;
    if !updated {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Quotation",
            id,
        }));
    }

    if let Some(obj) = body.as_object_mut() {
        obj.insert("id".into(), serde_json::json!(id));
    }
    Ok(Json(body))
}

/// DELETE /api/v1/quotations/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    rbac::require(&user, Action::DeleteRecords)?;

    let deleted = QuotationRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Quotation",
            id,
        }));
    }

    activity::record(
        &state.pool,
        EntityKind::Quotation,
        ActivityAction::Delete,
        format!("Deleted quotation {id}"),
    )
    .await;

    Ok(StatusCode::NO_CONTENT)
}
