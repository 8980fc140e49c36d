use axum::routing::{delete, post};
use axum::Router;

use crate::handlers::work_relationship;
use crate::state::AppState;

/// Routes mounted at `/work-relationships`.
///
/// Listing lives under `/artwork/{id}/relationships` and
/// `/tattoos/{id}/relationships`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(work_relationship::create))
        .route("/{id}", delete(work_relationship::delete))
}
