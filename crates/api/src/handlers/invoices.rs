//! Handlers for the `/invoices` resource.
//!
//! The update path is the one place where activity logging is conditional:
//! only requests carrying an explicit `activity_description` feed the
//! dashboard, and those go through the dedup window. Plain field edits stay
//! silent to keep routine edits out of the feed.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use opsdesk_core::activity::{ActivityAction, EntityKind};
use opsdesk_core::error::CoreError;
use opsdesk_core::permissions::Action;
use opsdesk_core::reporting::{derive_report_status, InvoiceStatus, ReportStatus};
use opsdesk_core::types::{DbId, Timestamp};
use opsdesk_db::models::invoice::{CreateInvoice, Invoice, UpdateInvoice};
use opsdesk_db::repositories::InvoiceRepo;
use serde::{Deserialize, Serialize};

use crate::activity;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// An invoice as returned by the listing, with the effective report status.
#[derive(Debug, Serialize)]
pub struct InvoiceView {
    pub id: DbId,
    pub client_name: String,
    pub company_name: String,
    pub issue_date: Timestamp,
    pub due_date: Timestamp,
    pub amount: f64,
    pub status: String,
    /// Persisted value when present, otherwise derived from `status`.
    pub report_status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Invoice> for InvoiceView {
    fn from(row: Invoice) -> Self {
        // The status column is CHECK-constrained, so parse only fails for
        // rows predating a schema change; those derive as Draft would.
        let status = InvoiceStatus::parse(&row.status).unwrap_or(InvoiceStatus::Draft);
        let persisted = row.report_status.as_deref().and_then(ReportStatus::parse);
        let effective = derive_report_status(status, persisted);

        Self {
            id: row.id,
            client_name: row.client_name,
            company_name: row.company_name,
            issue_date: row.issue_date,
            due_date: row.due_date,
            amount: row.amount,
            status: row.status,
            report_status: effective.as_str().to_string(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Request body for `PUT /invoices`.
///
/// The id travels in the body, and the field set is an explicit allow-list:
/// unknown fields are rejected rather than merged. `activity_description` is
/// an instruction to the activity log only and is never stored on the
/// invoice.
#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateInvoiceRequest {
    #[serde(skip_serializing)]
    pub id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_status: Option<String>,
    #[serde(skip_serializing)]
    pub activity_description: Option<String>,
}

// ---------------------------------------------------------------------------
// Validation helpers
// ---------------------------------------------------------------------------

fn validate_amount(amount: f64) -> AppResult<()> {
    if amount < 0.0 {
        return Err(AppError::BadRequest("amount must be non-negative".into()));
    }
    Ok(())
}

fn validate_status(status: &str) -> AppResult<()> {
    InvoiceStatus::parse(status)
        .map(|_| ())
        .ok_or_else(|| AppError::BadRequest(format!("Unknown invoice status '{status}'")))
}

fn validate_report_status(report_status: &str) -> AppResult<()> {
    ReportStatus::parse(report_status)
        .map(|_| ())
        .ok_or_else(|| AppError::BadRequest(format!("Unknown report status '{report_status}'")))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/invoices
///
/// List invoices, newest first, with the effective report status.
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<InvoiceView>>> {
    rbac::require(&user, Action::ViewFinance)?;

    let invoices = InvoiceRepo::list(&state.pool).await?;
    Ok(Json(invoices.into_iter().map(InvoiceView::from).collect()))
}

/// POST /api/v1/invoices
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateInvoice>,
) -> AppResult<(StatusCode, Json<Invoice>)> {
    rbac::require(&user, Action::ManageInvoices)?;

    validate_amount(input.amount)?;
    if let Some(ref status) = input.status {
        validate_status(status)?;
    }
    if let Some(ref report_status) = input.report_status {
        validate_report_status(report_status)?;
    }

    let invoice = InvoiceRepo::create(&state.pool, &input).await?;

    activity::record(
        &state.pool,
        EntityKind::Invoice,
        ActivityAction::Create,
        format!("Created invoice for {}", invoice.client_name),
    )
    .await;

    Ok((StatusCode::CREATED, Json(invoice)))
}

/// PUT /api/v1/invoices
///
/// Merge the provided fields into the invoice. The response echoes the
/// identifier plus the submitted fields; the stored row is not read back.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<UpdateInvoiceRequest>,
) -> AppResult<Json<serde_json::Value>> {
    rbac::require(&user, Action::ManageInvoices)?;

    let id = input
        .id
        .ok_or_else(|| AppError::BadRequest("ID is required".into()))?;

    if let Some(amount) = input.amount {
        validate_amount(amount)?;
    }
    if let Some(ref status) = input.status {
        validate_status(status)?;
    }
    if let Some(ref report_status) = input.report_status {
        validate_report_status(report_status)?;
    }

    // Serialize the echo body before the field set is moved into the DTO.
    let mut body = serde_json::to_value(&input)
        .map_err(|e| AppError::InternalError(format!("Response serialization error: {e}")))?;

    let fields = UpdateInvoice {
        client_name: input.client_name,
        company_name: input.company_name,
        issue_date: input.issue_date,
        due_date: input.due_date,
        amount: input.amount,
        status: input.status,
        report_status: input.report_status,
    };

    let updated = InvoiceRepo::update(&state.pool, id, &fields).await?;
    if !updated {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Invoice",
            id,
        }));
    }

    // Only explicit descriptions feed the dashboard, and they go through the
    // dedup window. A failure here must not fail the update.
    if let Some(description) = input
        .activity_description
        .as_deref()
        .filter(|d| !d.is_empty())
    {
        activity::record_deduplicated(
            &state.pool,
            EntityKind::Invoice,
            ActivityAction::Update,
            description.to_string(),
        )
        .await;
    }

    if let Some(obj) = body.as_object_mut() {
        obj.insert("id".into(), serde_json::json!(id));
    }
    Ok(Json(body))
}

/// DELETE /api/v1/invoices/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    rbac::require(&user, Action::DeleteRecords)?;

    let deleted = InvoiceRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Invoice",
            id,
        }));
    }

    activity::record(
        &state.pool,
        EntityKind::Invoice,
        ActivityAction::Delete,
        format!("Deleted invoice {id}"),
    )
    .await;

    Ok(StatusCode::NO_CONTENT)
}
