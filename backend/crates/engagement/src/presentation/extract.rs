//! Request Extractors

use axum::extract::FromRequest;
use axum::extract::rejection::JsonRejection;

use crate::error::EngagementError;

/// JSON body that rejects with a 400 problem response
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(EngagementError))]
pub struct JsonBody<T>(pub T);

impl From<JsonRejection> for EngagementError {
    fn from(rejection: JsonRejection) -> Self {
        EngagementError::InvalidRequest(rejection.body_text())
    }
}
