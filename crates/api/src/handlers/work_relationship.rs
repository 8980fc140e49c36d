//! Handlers for artwork/tattoo links.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use gallery_core::error::CoreError;
use gallery_core::types::DbId;
use gallery_core::work::WorkKind;
use gallery_db::models::work_relationship::{CreateWorkRelationship, WorkRelationship};
use gallery_db::repositories::{WorkRelationshipRepo, WorkRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

async fn ensure_live(state: &AppState, kind: WorkKind, id: DbId) -> AppResult<()> {
    if WorkRepo::exists(&state.pool, kind, id).await? {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: kind.entity_name(),
            id,
        }))
    }
}

/// POST /api/v1/work-relationships
pub async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    body: Result<Json<CreateWorkRelationship>, JsonRejection>,
) -> AppResult<(StatusCode, Json<DataResponse<WorkRelationship>>)> {
    let Json(mut input) = body?;
    if let Some(kind) = &input.relationship_type {
        let kind = kind.trim();
        if kind.is_empty() {
            return Err(CoreError::Validation("relationship_type must not be empty".into()).into());
        }
        input.relationship_type = Some(kind.to_string());
    }

    ensure_live(&state, WorkKind::Artwork, input.artwork_id).await?;
    ensure_live(&state, WorkKind::Tattoos, input.tattoo_id).await?;

    let link = WorkRelationshipRepo::create(&state.pool, &input).await?;
    tracing::info!(
        id = link.id,
        artwork_id = link.artwork_id,
        tattoo_id = link.tattoo_id,
        user_id = %user.id,
        "Work relationship created",
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: link })))
}

/// DELETE /api/v1/work-relationships/{id}
pub async fn delete(
    user: AuthUser,
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = path?;
    if WorkRelationshipRepo::delete(&state.pool, id).await? {
        tracing::info!(id, user_id = %user.id, "Work relationship deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "WorkRelationship",
            id,
        }))
    }
}

/// GET /api/v1/artwork/{id}/relationships
pub async fn list_for_artwork(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<DataResponse<Vec<WorkRelationship>>>> {
    let Path(id) = path?;
    ensure_live(&state, WorkKind::Artwork, id).await?;
    let links = WorkRelationshipRepo::list_for_artwork(&state.pool, id).await?;
    Ok(Json(DataResponse { data: links }))
}

/// GET /api/v1/tattoos/{id}/relationships
pub async fn list_for_tattoo(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<DataResponse<Vec<WorkRelationship>>>> {
    let Path(id) = path?;
    ensure_live(&state, WorkKind::Tattoos, id).await?;
    let links = WorkRelationshipRepo::list_for_tattoo(&state.pool, id).await?;
    Ok(Json(DataResponse { data: links }))
}
