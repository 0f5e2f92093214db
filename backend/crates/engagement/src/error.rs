//! Engagement Error Types
//!
//! Engagement-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. User-facing messages are Korean, matching
//! the blog front end.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::rate_limit::RateLimitResult;
use serde_json::json;
use thiserror::Error;

/// Engagement-specific result type alias
pub type EngagementResult<T> = Result<T, EngagementError>;

/// Engagement-specific error variants
#[derive(Debug, Error)]
pub enum EngagementError {
    /// Sign-up rate limit hit; retry after `reset_at_ms`
    #[error("잠시 후 다시 시도해주세요.")]
    RateLimited { reset_at_ms: i64 },

    #[error("유효한 이메일 주소를 입력해주세요.")]
    InvalidEmail,

    /// Subscriber exists, active or not
    #[error("이미 구독 중인 이메일입니다.")]
    AlreadySubscribed,

    #[error("구독 정보를 찾을 수 없습니다.")]
    SubscriberNotFound,

    #[error("댓글을 찾을 수 없습니다.")]
    CommentNotFound,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Post index lookup failed while building an admin view
    #[error("Content error: {0}")]
    Content(#[from] content::ContentError),
}

impl EngagementError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            EngagementError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            EngagementError::InvalidEmail
            | EngagementError::AlreadySubscribed
            | EngagementError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            EngagementError::SubscriberNotFound | EngagementError::CommentNotFound => {
                StatusCode::NOT_FOUND
            }
            EngagementError::Database(_) | EngagementError::Content(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngagementError::RateLimited { .. } => ErrorKind::TooManyRequests,
            EngagementError::InvalidEmail
            | EngagementError::AlreadySubscribed
            | EngagementError::InvalidRequest(_) => ErrorKind::BadRequest,
            EngagementError::SubscriberNotFound | EngagementError::CommentNotFound => {
                ErrorKind::NotFound
            }
            EngagementError::Database(_) | EngagementError::Content(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            EngagementError::Database(_) | EngagementError::Content(_) => {
                AppError::internal("처리 중 오류가 발생했습니다.")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            EngagementError::Database(e) => {
                tracing::error!(error = %e, "Engagement database error");
            }
            EngagementError::Content(e) => {
                tracing::error!(error = %e, "Post index lookup failed");
            }
            EngagementError::RateLimited { reset_at_ms } => {
                tracing::warn!(reset_at_ms, "Newsletter sign-up rate limited");
            }
            _ => {
                tracing::debug!(error = %self, "Engagement error");
            }
        }
    }
}

impl IntoResponse for EngagementError {
    fn into_response(self) -> Response {
        self.log();

        if let EngagementError::RateLimited { reset_at_ms } = self {
            let result = RateLimitResult {
                allowed: false,
                remaining: 0,
                reset_at_ms,
            };
            let body = json!({
                "success": false,
                "error": self.to_string(),
                "resetTime": reset_at_ms,
            });
            return (StatusCode::TOO_MANY_REQUESTS, result.headers(), Json(body)).into_response();
        }

        self.to_app_error().into_response()
    }
}

impl From<EngagementError> for AppError {
    fn from(err: EngagementError) -> Self {
        err.to_app_error()
    }
}
