use axum::routing::post;
use axum::Router;

use crate::handlers::drive;
use crate::state::AppState;

/// Routes mounted at `/drive`.
pub fn router() -> Router<AppState> {
    Router::new().route("/import", post(drive::import))
}
