use axum::routing::{get, post};
use axum::Router;

use crate::handlers::checkout;
use crate::state::AppState;

/// Routes mounted at `/checkout/sessions`. Public.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(checkout::create_session))
        .route("/{id}", get(checkout::get_session))
}
