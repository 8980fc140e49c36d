//! Create and update for `/tattoos`. Everything else is in [`super::work`].

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use gallery_core::error::CoreError;
use gallery_core::slug::{resolve_slug, validate_slug};
use gallery_core::types::DbId;
use gallery_db::models::tattoo::{CreateTattoo, Tattoo, UpdateTattoo};
use gallery_db::repositories::TattooRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::work::validate_title;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/tattoos
pub async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    body: Result<Json<CreateTattoo>, JsonRejection>,
) -> AppResult<(StatusCode, Json<DataResponse<Tattoo>>)> {
    let Json(mut input) = body?;
    input.title = validate_title(&input.title)?;
    input.slug = Some(resolve_slug(input.slug.as_deref(), &input.title)?);

    let tattoo = TattooRepo::create(&state.pool, &input).await?;
    tracing::info!(id = tattoo.id, slug = %tattoo.slug, user_id = %user.id, "Tattoo created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: tattoo })))
}

/// PUT /api/v1/tattoos/{id}
pub async fn update(
    user: AuthUser,
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    body: Result<Json<UpdateTattoo>, JsonRejection>,
) -> AppResult<Json<DataResponse<Tattoo>>> {
    let Path(id) = path?;
    let Json(mut input) = body?;
    if let Some(title) = &input.title {
        input.title = Some(validate_title(title)?);
    }
    if let Some(slug) = &input.slug {
        validate_slug(slug)?;
    }

    let tattoo = TattooRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Tattoo",
            id,
        }))?;
    tracing::info!(id, version = tattoo.version, user_id = %user.id, "Tattoo updated");
    Ok(Json(DataResponse { data: tattoo }))
}
