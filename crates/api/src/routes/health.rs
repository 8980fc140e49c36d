use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
    /// Which external delegates have a base URL configured.
    pub delegates: DelegateStatus,
}

/// Configured/unconfigured flag per delegate. Not a reachability probe.
#[derive(Serialize)]
pub struct DelegateStatus {
    pub ticketing: bool,
    pub ai_extract: bool,
    pub drive: bool,
}

/// GET /health
///
/// `degraded` when the database does not answer. Delegates are reported but
/// never affect the status, since each one is optional.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = gallery_db::health_check(&state.pool).await.is_ok();
    let delegates = &state.config.delegates;

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        delegates: DelegateStatus {
            ticketing: delegates.ticketing_url.is_some(),
            ai_extract: delegates.ai_extract_url.is_some(),
            drive: delegates.drive_url.is_some(),
        },
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
