//! Handlers for the `/employees` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use opsdesk_core::activity::{ActivityAction, EntityKind};
use opsdesk_core::error::CoreError;
use opsdesk_core::permissions::Action;
use opsdesk_core::types::{DbId, Timestamp};
use opsdesk_db::models::employee::{CreateEmployee, Employee, UpdateEmployee};
use opsdesk_db::repositories::EmployeeRepo;
use serde::{Deserialize, Serialize};

use crate::activity;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac;
use crate::state::AppState;

/// Request body for `PUT /employees`. Allow-listed fields plus the body id.
#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateEmployeeRequest {
    #[serde(skip_serializing)]
    pub id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
}

/// GET /api/v1/employees
pub async fn list(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<Vec<Employee>>> {
    rbac::require(&user, Action::ViewEmployees)?;

    let employees = EmployeeRepo::list(&state.pool).await?;
    Ok(Json(employees))
}

/// POST /api/v1/employees
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateEmployee>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    rbac::require(&user, Action::ManageEmployees)?;

    let employee = EmployeeRepo::create(&state.pool, &input).await?;

    activity::record(
        &state.pool,
        EntityKind::Employee,
        ActivityAction::Create,
        format!(
            "Added employee {} {}",
            employee.first_name, employee.last_name
        ),
    )
    .await;

    Ok((StatusCode::CREATED, Json(employee)))
}

/// PUT /api/v1/employees
///
/// Echoes the identifier plus the submitted fields.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<UpdateEmployeeRequest>,
) -> AppResult<Json<serde_json::Value>> {
    rbac::require(&user, Action::ManageEmployees)?;

    let id = input
        .id
        .ok_or_else(|| AppError::BadRequest("ID is required".into()))?;

    let mut body = serde_json::to_value(&input)
        .map_err(|e| AppError::InternalError(format!("Response serialization error: {e}")))?;

    let fields = UpdateEmployee {
        employee_code: input.employee_code,
        first_name: input.first_name,
        last_name: input.last_name,
        email: input.email,
        phone: input.phone,
        position: input.position,
        department: input.department,
        status: input.status,
        join_date: input.join_date,
        salary: input.salary,
    };

    let updated = EmployeeRepo::update(&state.pool, id, &fields).await?;
    if !updated {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id,
        }));
    }

    activity::record(
        &state.pool,
        EntityKind::Employee,
        ActivityAction::Update,
        format!("Updated employee {id}"),
    )
    .await;

    if let Some(obj) = body.as_object_mut() {
        obj.insert("id".into(), serde_json::json!(id));
    }
    Ok(Json(body))
}

/// DELETE /api/v1/employees/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    rbac::require(&user, Action::DeleteRecords)?;

    let deleted = EmployeeRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id,
        }));
    }

    activity::record(
        &state.pool,
        EntityKind::Employee,
        ActivityAction::Delete,
        format!("Deleted employee {id}"),
    )
    .await;

    Ok(StatusCode::NO_CONTENT)
}
