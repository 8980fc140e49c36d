//! Route definitions for the `/tattoos` resource.

use axum::routing::{get, post, put};
use axum::Router;
use gallery_db::models::tattoo::Tattoo;

use crate::handlers::{tattoo, work, work_relationship};
use crate::state::AppState;

/// Routes mounted at `/tattoos`. Same shape as `/artwork`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(work::list::<Tattoo>).post(tattoo::create))
        .route("/by-slug", get(work::get_by_slug::<Tattoo>))
        .route("/search", get(work::search::<Tattoo>))
        .route("/reorder", put(work::reorder::<Tattoo>))
        .route(
            "/{id}",
            get(work::get_by_id::<Tattoo>)
                .put(tattoo::update)
                .delete(work::delete::<Tattoo>),
        )
        .route("/{id}/relationships", get(work_relationship::list_for_tattoo))
        .route("/{id}/extract-metadata", post(work::extract_metadata::<Tattoo>))
}
