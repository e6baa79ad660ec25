//! Handlers for the `/expenses` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use opsdesk_core::activity::{ActivityAction, EntityKind};
use opsdesk_core::error::CoreError;
use opsdesk_core::permissions::Action;
use opsdesk_core::types::DbId;
use opsdesk_db::models::expense::{CreateExpense, Expense};
use opsdesk_db::repositories::ExpenseRepo;

use crate::activity;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac;
use crate::state::AppState;

/// GET /api/v1/expenses
pub async fn list(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<Vec<Expense>>> {
    rbac::require(&user, Action::ViewFinance)?;

    let expenses = ExpenseRepo::list(&state.pool).await?;
    Ok(Json(expenses))
}

/// POST /api/v1/expenses
///
/// New expenses default to `Pending` status.
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateExpense>,
) -> AppResult<(StatusCode, Json<Expense>)> {
    let expense = ExpenseRepo::create(&state.pool, &input).await?;

    activity::record(
        &state.pool,
        EntityKind::Expense,
        ActivityAction::Create,
        format!("Added expense: {}", expense.description),
    )
    .await;

    Ok((StatusCode::CREATED, Json(expense)))
}

/// DELETE /api/v1/expenses/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    rbac::require(&user, Action::DeleteRecords)?;

    let deleted = ExpenseRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Expense",
            id,
        }));
    }

    Ok(StatusCode::NO_CONTENT)
}
