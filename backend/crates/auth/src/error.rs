//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email already belongs to an account
    #[error("Email is already registered")]
    EmailTaken,

    /// User name already belongs to an account
    #[error("Username is already taken")]
    UserNameTaken,

    /// Unknown email or wrong password. Deliberately indistinguishable.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Bad signature, malformed or expired bearer token
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Input failed validation
    #[error("{message}")]
    Validation {
        message: String,
        action: Option<String>,
    },

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    pub fn validation(message: impl Into<String>) -> Self {
        AuthError::Validation {
            message: message.into(),
            action: None,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    ///
    /// `Database` reports 500 here; the response refines it through the
    /// kernel's `sqlx::Error` conversion (503 on pool exhaustion, 409 on a
    /// unique violation).
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::EmailTaken | AuthError::UserNameTaken => ErrorKind::Conflict,
            AuthError::InvalidCredentials | AuthError::InvalidToken => ErrorKind::Unauthorized,
            AuthError::Validation { .. } => ErrorKind::BadRequest,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Internal details stay in the logs.
    pub fn into_app_error(self) -> AppError {
        match self {
            AuthError::Validation { message, action } => {
                let err = AppError::bad_request(message);
                match action {
                    Some(action) => err.with_action(action),
                    None => err,
                }
            }
            AuthError::Database(e) => AppError::from(e),
            AuthError::Internal(_) => {
                AppError::internal("Internal server error").with_action("Please try again later")
            }
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

/// Value objects validate into `AppError`; client errors become `Validation`.
impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        if err.kind().is_client_error() {
            AuthError::Validation {
                message: err.message().to_string(),
                action: err.action().map(str::to_string),
            }
        } else {
            AuthError::Internal(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AuthError::EmailTaken.status_code(), StatusCode::CONFLICT);
        assert_eq!(AuthError::UserNameTaken.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            AuthError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AuthError::InvalidToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AuthError::validation("bad").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AuthError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_app_error_keeps_user_message() {
        let err = AuthError::EmailTaken.into_app_error();
        assert_eq!(err.status_code(), 409);
        assert_eq!(err.message(), "Email is already registered");

        let err = AuthError::InvalidCredentials.into_app_error();
        assert_eq!(err.message(), "Invalid credentials");
    }

    #[test]
    fn test_internal_details_hidden() {
        let err = AuthError::Internal("hash parameters rejected".into()).into_app_error();
        assert_eq!(err.status_code(), 500);
        assert!(!err.message().contains("hash"));
    }

    #[test]
    fn test_from_app_error() {
        let app = AppError::bad_request("Invalid email format").with_action("Check the address");
        match AuthError::from(app) {
            AuthError::Validation { message, action } => {
                assert_eq!(message, "Invalid email format");
                assert_eq!(action.as_deref(), Some("Check the address"));
            }
            other => panic!("unexpected {other:?}"),
        }

        let app = AppError::internal("Password hashing failed");
        assert!(matches!(AuthError::from(app), AuthError::Internal(_)));
    }

    #[test]
    fn test_validation_round_trip_keeps_action() {
        let err = AuthError::Validation {
            message: "Password is too short".into(),
            action: Some("Choose a longer password".into()),
        }
        .into_app_error();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.action(), Some("Choose a longer password"));
    }
}
