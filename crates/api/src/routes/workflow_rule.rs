use axum::routing::{get, put};
use axum::Router;

use crate::handlers::workflow_rule;
use crate::state::AppState;

/// Routes mounted at `/workflow-rules`. All require auth.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// GET    /{id}            -> get_by_id
/// PUT    /{id}/enabled    -> set_enabled
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(workflow_rule::list).post(workflow_rule::create))
        .route("/{id}", get(workflow_rule::get_by_id))
        .route("/{id}/enabled", put(workflow_rule::set_enabled))
}
