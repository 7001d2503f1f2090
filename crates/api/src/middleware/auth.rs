//! JWT-based identity extractor for Axum handlers.
//!
//! Identity is optional: a request without an `Authorization` header is
//! anonymous and writes a null `user_id`. A header that is present but
//! malformed or carries an invalid token is rejected.

use axum::extract::OptionalFromRequestParts;
use axum::http::request::Parts;
use folio_core::error::CoreError;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from a JWT Bearer token in the `Authorization` header.
///
/// Take it as `Option<AuthUser>`:
///
/// ```ignore
/// async fn my_handler(user: Option<AuthUser>) -> AppResult<Json<()>> {
///     let user_id = user.map(|u| u.user_id);
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's opaque identifier (from `claims.sub`).
    pub user_id: String,
}

impl OptionalFromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Option<Self>, Self::Rejection> {
        let Some(header) = parts.headers.get("authorization") else {
            return Ok(None);
        };

        let auth_header = header.to_str().map_err(|_| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization header".into(),
            ))
        })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(Some(AuthUser {
            user_id: claims.sub,
        }))
    }
}
