//! Content Error Types
//!
//! Content-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::entities::Category;

/// Content-specific result type alias
pub type ContentResult<T> = Result<T, ContentError>;

/// Content-specific error variants
#[derive(Debug, Error)]
pub enum ContentError {
    /// No post with this slug
    #[error("Post not found: {0}")]
    PostNotFound(String),

    /// Category outside the known set
    #[error("Unknown category: {0}")]
    InvalidCategory(String),

    /// Two posts in the index share a slug
    #[error("Duplicate slug in post index: {0}")]
    DuplicateSlug(String),

    /// Post index could not be read
    #[error("Failed to read post index: {0}")]
    Io(#[from] std::io::Error),

    /// Post index is not valid JSON or has invalid records
    #[error("Failed to parse post index: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ContentError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ContentError::PostNotFound(_) => StatusCode::NOT_FOUND,
            ContentError::InvalidCategory(_) => StatusCode::BAD_REQUEST,
            ContentError::DuplicateSlug(_) | ContentError::Io(_) | ContentError::Parse(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContentError::PostNotFound(_) => ErrorKind::NotFound,
            ContentError::InvalidCategory(_) => ErrorKind::BadRequest,
            ContentError::DuplicateSlug(_) | ContentError::Io(_) | ContentError::Parse(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            ContentError::PostNotFound(_) => AppError::not_found("Post not found"),
            ContentError::InvalidCategory(_) => {
                let codes: Vec<&str> = Category::ALL.iter().map(Category::code).collect();
                AppError::bad_request(self.to_string())
                    .with_action(format!("Use one of {}", codes.join(", ")))
            }
            _ => AppError::internal("Content is unavailable"),
        }
    }

    fn log(&self) {
        match self {
            ContentError::Io(e) => tracing::error!(error = %e, "Post index I/O error"),
            ContentError::Parse(e) => tracing::error!(error = %e, "Post index parse error"),
            ContentError::DuplicateSlug(slug) => {
                tracing::error!(slug = %slug, "Duplicate slug in post index")
            }
            _ => tracing::debug!(error = %self, "Content error"),
        }
    }
}

impl IntoResponse for ContentError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<ContentError> for AppError {
    fn from(err: ContentError) -> Self {
        err.to_app_error()
    }
}
