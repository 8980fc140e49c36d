//! Authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::request::Parts;
use gallery_core::error::CoreError;

use crate::auth::identity::ResolveError;
use crate::error::AppError;
use crate::state::AppState;

/// Name of the cookie carrying the session token for browser clients.
pub const SESSION_COOKIE: &str = "session";

/// Authenticated caller.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication. The handler body never runs for unauthenticated
/// requests:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %user.id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Identity provider subject.
    pub id: String,
    pub email: String,
    pub name: Option<String>,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_token(parts)?;

        let identity = state
            .identity
            .resolve(&token)
            .await
            .map_err(|e| match e {
                ResolveError::Invalid => {
                    AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
                }
                ResolveError::Backend(msg) => AppError::InternalError(msg),
            })?;

        Ok(AuthUser {
            id: identity.id,
            email: identity.email,
            name: identity.name,
        })
    }
}

/// Pull the credential from `Authorization: Bearer` or, failing that, the
/// session cookie.
fn extract_token(parts: &Parts) -> Result<String, AppError> {
    if let Some(header) = parts.headers.get(AUTHORIZATION) {
        let token = header
            .to_str()
            .ok()
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Invalid Authorization format. Expected: Bearer <token>".into(),
                ))
            })?;
        return Ok(token.to_string());
    }

    parts
        .headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(|raw| cookie_value(raw, SESSION_COOKIE))
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Missing credentials".into()))
        })
}

/// Find `name` in a `Cookie` header value.
fn cookie_value(raw: &str, name: &str) -> Option<String> {
    raw.split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, v)| *k == name && !v.is_empty())
        .map(|(_, v)| v.to_string())
}
