//! Authentication handlers.
//!
//! ## Token Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Token Lifecycle                              │
//! │                                                                     │
//! │  POST /api/auth/register ──► account created (no tokens)            │
//! │                                                                     │
//! │  POST /api/auth/login ──► { access_token, refresh_token }           │
//! │       │                                                             │
//! │       │  access token on every request (Authorization: Bearer)      │
//! │       ▼                                                             │
//! │  access token expires (1h)                                          │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  POST /api/auth/refresh { refresh_token } ──► fresh pair            │
//! │                                                                     │
//! │  POST /api/auth/logout ──► acknowledgment (client drops tokens;     │
//! │                            there is no server-side session)         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::ApiError;
use crate::middleware::CurrentUser;
use crate::password::{hash_password, verify_password};
use crate::state::AppState;
use stockroom_core::validation::{validate_password, validate_username};
use stockroom_core::{Role, User};

// =============================================================================
// DTOs
// =============================================================================

/// Registration request body.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    /// Optional; defaults to `user`.
    #[serde(default)]
    pub role: Option<Role>,
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Refresh request body.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Issued token pair.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub role: Role,
}

/// Public view of a user account. Never includes the password hash.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserDto {
    pub id: String,
    pub username: String,
    pub role: Role,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        UserDto {
            id: u.id,
            username: u.username,
            role: u.role,
        }
    }
}

/// Plain acknowledgment body.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// `POST /api/auth/register`
///
/// Creates an account. 409 if the username is taken, 400 on invalid input.
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserDto>), ApiError> {
    let username = validate_username(&req.username)?;
    validate_password(&req.password)?;

    let role = req.role.unwrap_or_default();
    let password_hash = hash_password(&req.password)?;

    let user = User::new(username, password_hash, role);

    // The UNIQUE index is the source of truth for duplicates; a pre-check
    // would still race with concurrent registrations.
    let user = state.db.users().insert(&user).await?;

    info!(username = %user.username, role = %user.role, "User registered");

    Ok((StatusCode::CREATED, Json(UserDto::from(user))))
}

/// `POST /api/auth/login`
///
/// Verifies credentials and issues an access/refresh token pair.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let user = state.db.users().get_by_username(req.username.trim()).await?;

    let user = match user {
        Some(u) if verify_password(&req.password, &u.password_hash) => u,
        _ => {
            warn!(username = %req.username, "Failed login attempt");
            return Err(ApiError::InvalidCredentials);
        }
    };

    let tokens = issue_tokens(&state, &user)?;

    info!(username = %user.username, "Login successful");

    Ok(Json(tokens))
}

/// `POST /api/auth/refresh`
///
/// Exchanges a valid refresh token for a fresh pair.
///
/// The account is re-read so a role change (or deletion) since login takes
/// effect at refresh time instead of surviving until the refresh token
/// expires.
pub async fn refresh(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let claims = state.jwt.validate_refresh_token(&req.refresh_token)?;

    let user = state
        .db
        .users()
        .get_by_id(&claims.sub)
        .await?
        .ok_or_else(|| ApiError::unauthenticated("Account no longer exists"))?;

    let tokens = issue_tokens(&state, &user)?;

    info!(username = %user.username, "Token refreshed");

    Ok(Json(tokens))
}

/// `GET /api/auth/me`
///
/// Returns the authenticated account.
pub async fn me(Extension(current): Extension<CurrentUser>) -> Json<UserDto> {
    Json(UserDto {
        id: current.id,
        username: current.username,
        role: current.role,
    })
}

/// `POST /api/auth/logout`
///
/// Stateless acknowledgment: tokens are bearer credentials with no
/// server-side session to destroy, so the client simply drops them.
pub async fn logout(Extension(current): Extension<CurrentUser>) -> Json<MessageResponse> {
    info!(username = %current.username, "Logout");

    Json(MessageResponse {
        message: "Logged out successfully".to_string(),
    })
}

/// Builds a token pair for a user.
fn issue_tokens(state: &AppState, user: &User) -> Result<TokenResponse, ApiError> {
    let access_token = state
        .jwt
        .generate_access_token(&user.id, &user.username, user.role)?;
    let refresh_token = state
        .jwt
        .generate_refresh_token(&user.id, &user.username, user.role)?;

    Ok(TokenResponse {
        access_token,
        refresh_token,
        token_type: "Bearer".to_string(),
        expires_in: state.jwt.access_lifetime_secs(),
        role: user.role,
    })
}
