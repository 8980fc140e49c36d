//! Checkout sessions, forwarded to the ticketing provider.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use gallery_core::error::CoreError;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Longest session id accepted before forwarding.
const MAX_SESSION_ID_LEN: usize = 255;

/// POST /api/v1/checkout/sessions
pub async fn create_session(
    State(state): State<AppState>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<DataResponse<serde_json::Value>>)> {
    let Json(body) = body?;
    if !body.is_object() {
        return Err(CoreError::Validation("checkout request must be a JSON object".into()).into());
    }

    let session = state.delegates.create_checkout_session(&body).await?;
    tracing::info!("Checkout session created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: session })))
}

/// GET /api/v1/checkout/sessions/{id}
pub async fn get_session(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<Json<DataResponse<serde_json::Value>>> {
    let Path(session_id) = path?;
    validate_session_id(&session_id)?;
    let session = state.delegates.get_checkout_session(&session_id).await?;
    Ok(Json(DataResponse { data: session }))
}

/// Session ids are interpolated into the provider URL.
fn validate_session_id(id: &str) -> Result<(), CoreError> {
    let valid = !id.is_empty()
        && id.len() <= MAX_SESSION_ID_LEN
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(CoreError::Validation(format!("invalid checkout session id '{id}'")))
    }
}
