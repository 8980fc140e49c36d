//! Handlers for `/workflow-rules`.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use gallery_core::error::CoreError;
use gallery_core::types::DbId;
use gallery_db::models::workflow_rule::{CreateWorkflowRule, SetWorkflowRuleEnabled, WorkflowRule};
use gallery_db::repositories::WorkflowRuleRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "WorkflowRule",
        id,
    })
}

/// Trim the required text fields and check `config` is an object.
fn validate_create(input: &mut CreateWorkflowRule) -> Result<(), CoreError> {
    for (field, value) in [
        ("name", &mut input.name),
        ("trigger_event", &mut input.trigger_event),
        ("action", &mut input.action),
    ] {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(CoreError::Validation(format!("{field} must not be empty")));
        }
        *value = trimmed.to_string();
    }
    if let Some(config) = &input.config {
        if !config.is_object() {
            return Err(CoreError::Validation("config must be a JSON object".into()));
        }
    }
    Ok(())
}

/// GET /api/v1/workflow-rules
pub async fn list(
    _user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<WorkflowRule>>>> {
    let rules = WorkflowRuleRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: rules }))
}

/// POST /api/v1/workflow-rules
pub async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    body: Result<Json<CreateWorkflowRule>, JsonRejection>,
) -> AppResult<(StatusCode, Json<DataResponse<WorkflowRule>>)> {
    let Json(mut input) = body?;
    validate_create(&mut input)?;

    let rule = WorkflowRuleRepo::create(&state.pool, &input).await?;
    tracing::info!(id = rule.id, name = %rule.name, user_id = %user.id, "Workflow rule created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: rule })))
}

/// GET /api/v1/workflow-rules/{id}
pub async fn get_by_id(
    _user: AuthUser,
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<DataResponse<WorkflowRule>>> {
    let Path(id) = path?;
    let rule = WorkflowRuleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: rule }))
}

/// PUT /api/v1/workflow-rules/{id}/enabled
pub async fn set_enabled(
    user: AuthUser,
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    body: Result<Json<SetWorkflowRuleEnabled>, JsonRejection>,
) -> AppResult<Json<DataResponse<WorkflowRule>>> {
    let Path(id) = path?;
    let Json(input) = body?;
    let rule = WorkflowRuleRepo::set_enabled(&state.pool, id, input.is_enabled)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, is_enabled = rule.is_enabled, user_id = %user.id, "Workflow rule toggled");
    Ok(Json(DataResponse { data: rule }))
}
