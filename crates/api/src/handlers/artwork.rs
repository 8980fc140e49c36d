//! Create and update for `/artwork`. Everything else is in [`super::work`].

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use gallery_core::error::CoreError;
use gallery_core::slug::{resolve_slug, validate_slug};
use gallery_core::types::DbId;
use gallery_db::models::artwork::{Artwork, CreateArtwork, UpdateArtwork};
use gallery_db::repositories::ArtworkRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::work::validate_title;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/artwork
pub async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    body: Result<Json<CreateArtwork>, JsonRejection>,
) -> AppResult<(StatusCode, Json<DataResponse<Artwork>>)> {
    let Json(mut input) = body?;
    input.title = validate_title(&input.title)?;
    input.slug = Some(resolve_slug(input.slug.as_deref(), &input.title)?);

    let artwork = ArtworkRepo::create(&state.pool, &input).await?;
    tracing::info!(id = artwork.id, slug = %artwork.slug, user_id = %user.id, "Artwork created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: artwork })))
}

/// PUT /api/v1/artwork/{id}
pub async fn update(
    user: AuthUser,
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    body: Result<Json<UpdateArtwork>, JsonRejection>,
) -> AppResult<Json<DataResponse<Artwork>>> {
    let Path(id) = path?;
    let Json(mut input) = body?;
    if let Some(title) = &input.title {
        input.title = Some(validate_title(title)?);
    }
    if let Some(slug) = &input.slug {
        validate_slug(slug)?;
    }

    let artwork = ArtworkRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Artwork",
            id,
        }))?;
    tracing::info!(id, version = artwork.version, user_id = %user.id, "Artwork updated");
    Ok(Json(DataResponse { data: artwork }))
}
