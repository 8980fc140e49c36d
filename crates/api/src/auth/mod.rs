//! Authentication primitives.
//!
//! - [`identity`] -- The [`IdentityResolver`](identity::IdentityResolver)
//!   seam and the caller identity it produces.
//! - [`jwt`] -- HS256 token validation (and minting for tests/tooling).

pub mod identity;
pub mod jwt;
