//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockroom                          │
//! │                                                                     │
//! │  Handler returns Result<T, ApiError>                                │
//! │       │                                                             │
//! │       ├── ValidationError ──► 400 VALIDATION_ERROR                  │
//! │       ├── bad credentials ──► 401 INVALID_CREDENTIALS               │
//! │       ├── missing/bad token ► 401 UNAUTHENTICATED                   │
//! │       ├── non-admin write ──► 403 FORBIDDEN                         │
//! │       ├── DbError::NotFound ► 404 NOT_FOUND                         │
//! │       ├── unique violation ─► 409 CONFLICT                          │
//! │       └── anything else ────► 500 (generic message, detail logged)  │
//! │                                                                     │
//! │  Response body: {"code": "NOT_FOUND", "message": "..."}             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Internal detail never goes over the wire: database failures are logged
//! with `tracing::error!` and answered with a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use stockroom_core::{CoreError, ValidationError};
use stockroom_db::DbError;

/// API errors, one variant per client-visible failure class.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Input validation failed.
    #[error("{0}")]
    Validation(String),

    /// Login failed. Deliberately does not say whether the username or the
    /// password was wrong.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Missing or invalid bearer token.
    #[error("Authentication required: {0}")]
    Unauthenticated(String),

    /// Authenticated but lacking the required role.
    #[error("Admin privileges required")]
    Forbidden,

    /// Resource not found.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Uniqueness conflict (e.g. duplicate username).
    #[error("{field} '{value}' already exists")]
    Conflict { field: String, value: String },

    /// Database failure. The message is generic; detail lives in the logs.
    #[error("Database operation failed")]
    Database,

    /// Anything else.
    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    /// Creates a not found error.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        ApiError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Creates an unauthenticated error.
    pub fn unauthenticated(reason: impl Into<String>) -> Self {
        ApiError::Unauthenticated(reason.into())
    }

    /// Machine-readable code for the response body.
    fn code(&self) -> ErrorCode {
        match self {
            ApiError::Validation(_) => ErrorCode::ValidationError,
            ApiError::InvalidCredentials => ErrorCode::InvalidCredentials,
            ApiError::Unauthenticated(_) => ErrorCode::Unauthenticated,
            ApiError::Forbidden => ErrorCode::Forbidden,
            ApiError::NotFound { .. } => ErrorCode::NotFound,
            ApiError::Conflict { .. } => ErrorCode::Conflict,
            ApiError::Database => ErrorCode::DatabaseError,
            ApiError::Internal => ErrorCode::Internal,
        }
    }

    /// HTTP status for the variant.
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials | ApiError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Database | ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ValidationError,
    InvalidCredentials,
    Unauthenticated,
    Forbidden,
    NotFound,
    Conflict,
    DatabaseError,
    Internal,
}

/// JSON body sent with every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    code: ErrorCode,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            code: self.code(),
            message: self.to_string(),
        };

        (self.status(), Json(body)).into_response()
    }
}

// =============================================================================
// Conversions From Lower Layers
// =============================================================================

/// Converts database errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => ApiError::NotFound { entity, id },
            DbError::UniqueViolation { field, value } => {
                // "users.username" from the driver reads poorly in a response
                let field = field.rsplit('.').next().unwrap_or(&field).to_string();
                ApiError::Conflict { field, value }
            }
            other => {
                tracing::error!(error = %other, "Database error");
                ApiError::Database
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", id),
            CoreError::UserNotFound(id) => ApiError::not_found("User", id),
            CoreError::Validation(e) => ApiError::Validation(e.to_string()),
        }
    }
}

/// Converts validation errors to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::Validation("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidCredentials.status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::Forbidden.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            ApiError::not_found("Product", "x").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Conflict {
                field: "username".into(),
                value: "bob".into()
            }
            .status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::Database.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_db_unique_violation_becomes_conflict() {
        let err: ApiError = DbError::UniqueViolation {
            field: "users.username".to_string(),
            value: "bob".to_string(),
        }
        .into();

        match err {
            ApiError::Conflict { field, value } => {
                assert_eq!(field, "username");
                assert_eq!(value, "bob");
            }
            other => panic!("expected Conflict, got {other:?}"),
        }
    }

    #[test]
    fn test_db_not_found_passes_through() {
        let err: ApiError = DbError::not_found("Product", "abc").into();
        assert!(matches!(err, ApiError::NotFound { .. }));
    }

    #[test]
    fn test_database_detail_is_not_exposed() {
        let err: ApiError = DbError::QueryFailed("secret table info".to_string()).into();
        assert_eq!(err.to_string(), "Database operation failed");
    }
}
