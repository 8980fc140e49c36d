//! Caller identity resolution.
//!
//! The auth extractor never inspects tokens itself: it hands the raw
//! credential to an [`IdentityResolver`] held in `AppState`. The default
//! implementation validates JWTs locally; other implementations can call
//! out to an external authorization service.

use async_trait::async_trait;
use jsonwebtoken::errors::ErrorKind;
use serde::Serialize;

use super::jwt::{validate_token, AuthTokenConfig};

/// A resolved caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
}

/// Why a credential could not be turned into an [`Identity`].
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The credential is malformed, expired, or not recognised.
    #[error("invalid or expired credentials")]
    Invalid,

    /// The lookup itself failed; the credential may or may not be valid.
    #[error("identity lookup failed: {0}")]
    Backend(String),
}

/// Resolves a bearer or session token to the caller's identity.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    async fn resolve(&self, token: &str) -> Result<Identity, ResolveError>;
}

/// Resolver backed by HS256 JWT validation.
pub struct JwtIdentityResolver {
    config: AuthTokenConfig,
}

impl JwtIdentityResolver {
    pub fn new(config: AuthTokenConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl IdentityResolver for JwtIdentityResolver {
    async fn resolve(&self, token: &str) -> Result<Identity, ResolveError> {
        let claims = validate_token(token, &self.config).map_err(|e| match e.kind() {
            ErrorKind::InvalidKeyFormat | ErrorKind::Crypto(_) => {
                ResolveError::Backend(e.to_string())
            }
            _ => ResolveError::Invalid,
        })?;

        Ok(Identity {
            id: claims.sub,
            email: claims.email,
            name: claims.name,
        })
    }
}
