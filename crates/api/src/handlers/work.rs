//! Handlers shared by `/artwork` and `/tattoos`.
//!
//! Each handler is generic over the row type; the routers instantiate
//! them once per table (`work::list::<Artwork>`, `work::list::<Tattoo>`).

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use gallery_core::error::CoreError;
use gallery_core::reorder::parse_reorder_updates;
use gallery_core::types::DbId;
use gallery_db::models::work::{
    ListWorksParams, ReorderOutcome, SearchWorksParams, SlugLookupParams, WorkRow,
};
use gallery_db::repositories::{SortOrderRepo, WorkRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::{DataResponse, ReorderResponse};
use crate::state::AppState;

fn not_found<T: WorkRow>(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: T::KIND.entity_name(),
        id,
    })
}

/// GET /api/v1/{kind}
pub async fn list<T: WorkRow>(
    State(state): State<AppState>,
    query: Result<Query<ListWorksParams>, QueryRejection>,
) -> AppResult<Json<DataResponse<Vec<T>>>> {
    let Query(params) = query?;
    let rows = WorkRepo::list::<T>(&state.pool, &params).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/v1/{kind}/{id}
pub async fn get_by_id<T: WorkRow>(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<DataResponse<T>>> {
    let Path(id) = path?;
    let row = WorkRepo::find_by_id::<T>(&state.pool, id)
        .await?
        .ok_or_else(|| not_found::<T>(id))?;
    Ok(Json(DataResponse { data: row }))
}

/// GET /api/v1/{kind}/by-slug?slug=...
pub async fn get_by_slug<T: WorkRow>(
    State(state): State<AppState>,
    query: Result<Query<SlugLookupParams>, QueryRejection>,
) -> AppResult<Json<DataResponse<T>>> {
    let Query(params) = query?;
    let row = WorkRepo::find_by_slug::<T>(&state.pool, &params.slug, params.published)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundBySlug {
                entity: T::KIND.entity_name(),
                slug: params.slug.clone(),
            })
        })?;
    Ok(Json(DataResponse { data: row }))
}

/// GET /api/v1/{kind}/search?q=...
pub async fn search<T: WorkRow>(
    State(state): State<AppState>,
    query: Result<Query<SearchWorksParams>, QueryRejection>,
) -> AppResult<Json<DataResponse<Vec<T>>>> {
    let Query(params) = query?;
    let rows = WorkRepo::search::<T>(&state.pool, &params).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// DELETE /api/v1/{kind}/{id}
///
/// Soft delete. Deleting a missing or already-deleted row is a 404.
pub async fn delete<T: WorkRow>(
    user: AuthUser,
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = path?;
    if WorkRepo::soft_delete(&state.pool, T::KIND, id).await? {
        tracing::info!(kind = %T::KIND, id, user_id = %user.id, "Work soft-deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found::<T>(id))
    }
}

/// PUT /api/v1/{kind}/reorder
///
/// The body is taken as raw JSON so that shape errors (a single object
/// instead of an array, a string `sort_order`) surface as 400 with a
/// precise message before anything is written.
pub async fn reorder<T: WorkRow>(
    user: AuthUser,
    State(state): State<AppState>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> AppResult<Json<ReorderResponse<T>>> {
    let Json(body) = body?;
    let entries = parse_reorder_updates(&body)?;

    match SortOrderRepo::reorder::<T>(&state.pool, &entries).await? {
        ReorderOutcome::Applied(rows) => {
            tracing::info!(
                kind = %T::KIND,
                updated = rows.len(),
                user_id = %user.id,
                "Reorder applied",
            );
            Ok(Json(ReorderResponse {
                success: true,
                updated: rows.len(),
                data: rows,
            }))
        }
        ReorderOutcome::Missing { id } => Err(not_found::<T>(id)),
        ReorderOutcome::Stale {
            id,
            expected,
            current,
        } => Err(AppError::Core(CoreError::Conflict(format!(
            "{} {id} is at version {current}, expected {expected}",
            T::KIND.entity_name()
        )))),
    }
}

/// POST /api/v1/{kind}/{id}/extract-metadata
///
/// Sends the row's image to the AI extractor and stores the returned
/// object as the row's `metadata`.
pub async fn extract_metadata<T: WorkRow>(
    user: AuthUser,
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<DataResponse<T>>> {
    let Path(id) = path?;
    let row = WorkRepo::find_by_id::<T>(&state.pool, id)
        .await?
        .ok_or_else(|| not_found::<T>(id))?;

    let image_url = row
        .image_url()
        .ok_or_else(|| {
            AppError::BadRequest(format!("{} {id} has no image_url", T::KIND.entity_name()))
        })?
        .to_string();

    let metadata = state.delegates.extract_metadata(&image_url).await?;
    if !metadata.is_object() {
        return Err(AppError::InternalError(format!(
            "AI extractor returned non-object metadata for {} {id}",
            T::KIND
        )));
    }

    let row = WorkRepo::set_metadata::<T>(&state.pool, id, &metadata)
        .await?
        .ok_or_else(|| not_found::<T>(id))?;

    tracing::info!(kind = %T::KIND, id, user_id = %user.id, "Metadata extracted");
    Ok(Json(DataResponse { data: row }))
}

/// Trim a title and reject it if nothing is left.
pub(crate) fn validate_title(title: &str) -> Result<String, CoreError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(CoreError::Validation("title must not be empty".into()));
    }
    Ok(title.to_string())
}
