//! Authentication middleware.
//!
//! `require_auth` validates the access token on protected routes and
//! injects a [`CurrentUser`] extension for handlers to consume. Role
//! checks stay in the handlers: the middleware answers "who is this",
//! the handler answers "may they do this".

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::auth::extract_bearer_token;
use crate::error::ApiError;
use crate::state::AppState;
use stockroom_core::Role;

/// The authenticated caller, extracted from a validated access token.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: String,
    pub username: String,
    pub role: Role,
}

impl CurrentUser {
    /// Errors with 403 unless the caller is an admin.
    pub fn ensure_admin(&self) -> Result<(), ApiError> {
        if self.role.is_admin() {
            Ok(())
        } else {
            Err(ApiError::Forbidden)
        }
    }
}

/// Axum middleware enforcing bearer authentication:
/// - extract the `Authorization: Bearer <token>` header
/// - validate signature, expiry, and token type (access, not refresh)
/// - inject [`CurrentUser`] into request extensions
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(extract_bearer_token)
        .ok_or_else(|| ApiError::unauthenticated("Missing bearer token"))?;

    let claims = state.jwt.validate_access_token(token)?;

    req.extensions_mut().insert(CurrentUser {
        id: claims.sub,
        username: claims.username,
        role: claims.role,
    });

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_admin() {
        let admin = CurrentUser {
            id: "1".into(),
            username: "root".into(),
            role: Role::Admin,
        };
        assert!(admin.ensure_admin().is_ok());

        let user = CurrentUser {
            id: "2".into(),
            username: "guest".into(),
            role: Role::User,
        };
        assert!(matches!(user.ensure_admin(), Err(ApiError::Forbidden)));
    }
}
