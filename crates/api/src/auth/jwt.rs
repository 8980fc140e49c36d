//! HS256 access-token validation.
//!
//! Tokens are minted by the external identity provider; this service only
//! validates them. [`generate_token`] exists for tests and operator tooling.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried by every access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the caller's stable identity provider id.
    pub sub: String,
    pub email: String,
    /// Display name, when the provider supplies one.
    #[serde(default)]
    pub name: Option<String>,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier.
    #[serde(default)]
    pub jti: Option<String>,
}

/// Configuration for token validation.
#[derive(Debug, Clone)]
pub struct AuthTokenConfig {
    /// HMAC-SHA256 secret shared with the identity provider.
    pub secret: String,
    /// Lifetime of tokens minted by [`generate_token`], in minutes.
    pub token_expiry_mins: i64,
}

/// Default lifetime for locally minted tokens.
const DEFAULT_TOKEN_EXPIRY_MINS: i64 = 60;

impl AuthTokenConfig {
    /// Load token configuration from environment variables.
    ///
    /// | Env Var                  | Required | Default |
    /// |--------------------------|----------|---------|
    /// | `AUTH_TOKEN_SECRET`      | **yes**  | --      |
    /// | `AUTH_TOKEN_EXPIRY_MINS` | no       | `60`    |
    ///
    /// # Panics
    ///
    /// Panics if `AUTH_TOKEN_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret = std::env::var("AUTH_TOKEN_SECRET")
            .expect("AUTH_TOKEN_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "AUTH_TOKEN_SECRET must not be empty");

        let token_expiry_mins: i64 = std::env::var("AUTH_TOKEN_EXPIRY_MINS")
            .unwrap_or_else(|_| DEFAULT_TOKEN_EXPIRY_MINS.to_string())
            .parse()
            .expect("AUTH_TOKEN_EXPIRY_MINS must be a valid i64");

        Self {
            secret,
            token_expiry_mins,
        }
    }
}

/// Mint an HS256 token for the given identity.
pub fn generate_token(
    sub: &str,
    email: &str,
    name: Option<&str>,
    config: &AuthTokenConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: sub.to_string(),
        email: email.to_string(),
        name: name.map(str::to_string),
        exp: now + config.token_expiry_mins * 60,
        iat: now,
        jti: Some(Uuid::new_v4().to_string()),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode a token, returning the embedded [`Claims`].
///
/// Checks the signature and expiration.
pub fn validate_token(
    token: &str,
    config: &AuthTokenConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}
