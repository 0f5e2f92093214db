//! Request Extractors

use axum::extract::FromRequest;
use axum::extract::rejection::JsonRejection;

use crate::error::SummaryError;

/// JSON body that rejects with a `{success: false, error}` 400
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(SummaryError))]
pub struct JsonBody<T>(pub T);

impl From<JsonRejection> for SummaryError {
    fn from(rejection: JsonRejection) -> Self {
        SummaryError::InvalidRequest(rejection.body_text())
    }
}
