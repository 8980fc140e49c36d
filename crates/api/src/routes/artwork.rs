//! Route definitions for the `/artwork` resource.

use axum::routing::{get, post, put};
use axum::Router;
use gallery_db::models::artwork::Artwork;

use crate::handlers::{artwork, work, work_relationship};
use crate::state::AppState;

/// Routes mounted at `/artwork`.
///
/// ```text
/// GET    /                         -> list
/// POST   /                         -> create
/// GET    /by-slug                  -> get_by_slug
/// GET    /search                   -> search
/// PUT    /reorder                  -> reorder
/// GET    /{id}                     -> get_by_id
/// PUT    /{id}                     -> update
/// DELETE /{id}                     -> delete
/// GET    /{id}/relationships       -> list_for_artwork
/// POST   /{id}/extract-metadata    -> extract_metadata
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(work::list::<Artwork>).post(artwork::create))
        .route("/by-slug", get(work::get_by_slug::<Artwork>))
        .route("/search", get(work::search::<Artwork>))
        .route("/reorder", put(work::reorder::<Artwork>))
        .route(
            "/{id}",
            get(work::get_by_id::<Artwork>)
                .put(artwork::update)
                .delete(work::delete::<Artwork>),
        )
        .route("/{id}/relationships", get(work_relationship::list_for_artwork))
        .route("/{id}/extract-metadata", post(work::extract_metadata::<Artwork>))
}
