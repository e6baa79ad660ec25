//! Handlers for the `/payments` resource.
//!
//! Recording a payment against an invoice opportunistically flips that
//! invoice to `Paid`. The two writes are independent: a failed invoice
//! update is warned and the payment still succeeds.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use opsdesk_core::error::CoreError;
use opsdesk_core::permissions::Action;
use opsdesk_core::types::{DbId, Timestamp};
use opsdesk_db::models::payment::{CreatePayment, Payment, UpdatePayment};
use opsdesk_db::repositories::{InvoiceRepo, PaymentRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac;
use crate::state::AppState;

/// Request body for `PUT /payments`. Allow-listed fields plus the body id.
#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct UpdatePaymentRequest {
    #[serde(skip_serializing)]
    pub id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// GET /api/v1/payments
pub async fn list(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<Vec<Payment>>> {
    rbac::require(&user, Action::ViewFinance)?;

    let payments = PaymentRepo::list(&state.pool).await?;
    Ok(Json(payments))
}

/// POST /api/v1/payments
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreatePayment>,
) -> AppResult<(StatusCode, Json<Payment>)> {
    rbac::require(&user, Action::ManagePayments)?;

    let payment = PaymentRepo::create(&state.pool, &input).await?;

    // Mark the referenced invoice paid. Best-effort: the payment record is
    // already durable, so a failure here is only warned.
    if let Some(invoice_id) = payment.invoice_id {
        match InvoiceRepo::mark_paid(&state.pool, invoice_id).await {
            Ok(true) => {}
            Ok(false) => {
                tracing::warn!(%invoice_id, "Payment references a missing invoice");
            }
            Err(err) => {
                tracing::warn!(error = %err, %invoice_id, "Failed to mark invoice paid");
            }
        }
    }

    Ok((StatusCode::CREATED, Json(payment)))
}

/// PUT /api/v1/payments
///
/// Echoes the identifier plus the submitted fields.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<UpdatePaymentRequest>,
) -> AppResult<Json<serde_json::Value>> {
    rbac::require(&user, Action::ManagePayments)?;

    let id = input
        .id
        .ok_or_else(|| AppError::BadRequest("ID is required".into()))?;

    let mut body = serde_json::to_value(&input)
        .map_err(|e| AppError::InternalError(format!("Response serialization error: {e}")))?;

    let fields = UpdatePayment {
        invoice_id: input.invoice_id,
        amount: input.amount,
        paid_date: input.paid_date,
        method: input.method,
        status: input.status,
    };

    let updated = PaymentRepo::update(&state.pool, id, &fields).await?;
    if !updated {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Payment",
            id,
        }));
    }

    if let Some(obj) = body.as_object_mut() {
        obj.insert("id".into(), serde_json::json!(id));
    }
    Ok(Json(body))
}

/// DELETE /api/v1/payments/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    rbac::require(&user, Action::DeleteRecords)?;

    let deleted = PaymentRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Payment",
            id,
        }));
    }

    Ok(StatusCode::NO_CONTENT)
}
