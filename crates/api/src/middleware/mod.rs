//! Request extractors.
//!
//! - [`auth::AuthUser`] -- The caller's identity from an optional JWT Bearer token.

pub mod auth;
