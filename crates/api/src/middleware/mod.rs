//! Request extractors.
//!
//! - [`auth::AuthUser`] -- Resolves the caller from a Bearer token or
//!   `session` cookie; rejects unauthenticated requests.

pub mod auth;
