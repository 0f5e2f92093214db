//! Summary Error Types
//!
//! Summary-specific error variants. Bodies follow the front end's
//! `{success: false, error}` shape.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::rate_limit::RateLimitResult;
use serde_json::json;
use thiserror::Error;

/// Summary-specific result type alias
pub type SummaryResult<T> = Result<T, SummaryError>;

/// Summary-specific error variants
#[derive(Debug, Error)]
pub enum SummaryError {
    /// Per-client limit hit; retry after `reset_at_ms`
    #[error("요청 한도를 초과했습니다. 잠시 후 다시 시도해주세요.")]
    RateLimited { reset_at_ms: i64 },

    /// No LLM API key configured
    #[error("AI 기능을 사용할 수 없습니다.")]
    Unavailable,

    #[error("잘못된 요청입니다: {0}")]
    InvalidRequest(String),

    /// LLM API call failed or returned something unusable
    #[error("LLM request failed: {0}")]
    Upstream(String),
}

impl SummaryError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            SummaryError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            SummaryError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            SummaryError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            SummaryError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SummaryError::RateLimited { .. } => ErrorKind::TooManyRequests,
            SummaryError::Unavailable => ErrorKind::ServiceUnavailable,
            SummaryError::InvalidRequest(_) => ErrorKind::BadRequest,
            SummaryError::Upstream(_) => ErrorKind::BadGateway,
        }
    }

    /// Message safe to show to the caller
    pub fn public_message(&self) -> String {
        match self {
            SummaryError::Upstream(_) => "요약을 생성하는 중 오류가 발생했습니다.".to_string(),
            _ => self.to_string(),
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.public_message())
    }

    fn log(&self) {
        match self {
            SummaryError::Upstream(msg) => {
                tracing::error!(message = %msg, "Summary generation failed");
            }
            SummaryError::Unavailable => {
                tracing::warn!("Summary requested but no LLM API key is configured");
            }
            SummaryError::RateLimited { reset_at_ms } => {
                tracing::warn!(reset_at_ms, "Summary rate limited");
            }
            SummaryError::InvalidRequest(_) => {
                tracing::debug!(error = %self, "Invalid summary request");
            }
        }
    }
}

impl IntoResponse for SummaryError {
    fn into_response(self) -> Response {
        self.log();

        let status = self.status_code();

        if let SummaryError::RateLimited { reset_at_ms } = self {
            let result = RateLimitResult {
                allowed: false,
                remaining: 0,
                reset_at_ms,
            };
            let body = json!({
                "success": false,
                "error": self.public_message(),
                "resetTime": reset_at_ms,
            });
            return (status, result.headers(), Json(body)).into_response();
        }

        let body = json!({
            "success": false,
            "error": self.public_message(),
        });
        (status, Json(body)).into_response()
    }
}

impl From<SummaryError> for AppError {
    fn from(err: SummaryError) -> Self {
        err.to_app_error()
    }
}

impl From<reqwest::Error> for SummaryError {
    fn from(err: reqwest::Error) -> Self {
        SummaryError::Upstream(err.to_string())
    }
}
