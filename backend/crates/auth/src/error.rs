//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// JWT secret or admin password missing
    #[error("Authentication is not configured")]
    NotConfigured,

    /// Wrong password
    #[error("Invalid password")]
    InvalidCredentials,

    /// Missing, forged or expired session; never more specific than this
    #[error("Authentication required")]
    SessionInvalid,

    /// Malformed request body
    #[error("Invalid request body: {0}")]
    InvalidRequest(String),

    /// Token could not be signed
    #[error("Failed to sign session token: {0}")]
    TokenSigning(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidCredentials | AuthError::SessionInvalid => StatusCode::UNAUTHORIZED,
            AuthError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AuthError::NotConfigured | AuthError::TokenSigning(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials | AuthError::SessionInvalid => ErrorKind::Unauthorized,
            AuthError::InvalidRequest(_) => ErrorKind::BadRequest,
            AuthError::NotConfigured | AuthError::TokenSigning(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    ///
    /// Server-side failures get a generic message so signing details never
    /// reach the client.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::NotConfigured | AuthError::TokenSigning(_) => {
                AppError::new(self.kind(), "Login failed")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::NotConfigured => {
                tracing::error!("Admin login attempted but auth is not configured");
            }
            AuthError::TokenSigning(msg) => {
                tracing::error!(message = %msg, "Session token signing failed");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid admin login attempt");
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
        self.to_app_error().into_response()
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        err.to_app_error()
    }
}
