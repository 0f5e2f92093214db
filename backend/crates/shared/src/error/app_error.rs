//! Application Error - Unified error type for the application
//!
//! Feature crates keep their own `thiserror` enums and convert into
//! [`AppError`] at the HTTP boundary. The client only ever sees
//! [`ProblemDetails`]; internal causes stay in the logs.

use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

use super::kind::ErrorKind;

/// Error as presented to API clients
///
/// ```rust
/// use kernel::error::app_error::AppError;
///
/// let err = AppError::not_found("Post not found: hello");
/// assert_eq!(err.status_code(), 404);
/// assert_eq!(err.problem().title, "Not Found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppError {
    kind: ErrorKind,
    detail: Cow<'static, str>,
    action: Option<Cow<'static, str>>,
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn new(kind: ErrorKind, detail: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            detail: detail.into(),
            action: None,
        }
    }

    pub fn bad_request(detail: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::BadRequest, detail)
    }

    pub fn not_found(detail: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::NotFound, detail)
    }

    pub fn internal(detail: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InternalServerError, detail)
    }

    /// Hint telling the user what to do next
    pub fn with_action(mut self, action: impl Into<Cow<'static, str>>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    pub fn message(&self) -> &str {
        &self.detail
    }

    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// RFC 7807 body for this error
    pub fn problem(&self) -> ProblemDetails<'_> {
        ProblemDetails {
            problem_type: format!("https://httpstatuses.io/{}", self.status_code()),
            title: self.kind.title(),
            status: self.status_code(),
            detail: &self.detail,
            action: self.action(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.detail)
    }
}

impl std::error::Error for AppError {}

/// RFC 7807 Problem Details for HTTP APIs
#[derive(Debug, Serialize)]
pub struct ProblemDetails<'a> {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: &'static str,
    pub status: u16,
    pub detail: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<&'a str>,
}
