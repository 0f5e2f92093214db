//! Request Extractors

use axum::extract::FromRequest;
use axum::extract::rejection::JsonRejection;

use crate::error::AuthError;

/// JSON body whose rejection is an [`AuthError`] instead of axum's plain-text 422
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AuthError))]
pub struct JsonBody<T>(pub T);

impl From<JsonRejection> for AuthError {
    fn from(rejection: JsonRejection) -> Self {
        AuthError::InvalidRequest(rejection.body_text())
    }
}
