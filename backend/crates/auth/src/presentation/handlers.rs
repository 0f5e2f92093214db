//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{CheckSessionUseCase, SignInInput, SignInUseCase, SignOutUseCase};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{PasswordRequest, SessionStatusResponse, SuccessResponse};
use crate::presentation::extract::JsonBody;

/// Shared state for auth handlers and the admin middleware
#[derive(Clone)]
pub struct AuthAppState {
    pub config: Arc<AuthConfig>,
}

impl AuthAppState {
    pub fn new(config: AuthConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub(crate) fn session_token(&self, headers: &HeaderMap) -> Option<String> {
        platform::cookie::extract_cookie(headers, &self.config.session_cookie_name)
    }
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AuthAppState>,
    JsonBody(req): JsonBody<PasswordRequest>,
) -> AuthResult<impl IntoResponse> {
    if req.password.is_empty() {
        return Err(AuthError::InvalidRequest("password must not be empty".to_string()));
    }

    let use_case = SignInUseCase::new(state.config.clone());
    let output = use_case.execute(SignInInput {
        password: req.password,
    })?;

    let cookie = state.config.cookie().build_set_cookie(&output.session_token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(SuccessResponse::ok()),
    ))
}

/// POST /api/auth/logout
pub async fn logout(State(state): State<AuthAppState>, headers: HeaderMap) -> impl IntoResponse {
    let token = state.session_token(&headers);

    let use_case = SignOutUseCase::new(state.config.clone());
    let cookie = use_case.execute(token.as_deref());

    (
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(SuccessResponse::ok()),
    )
}

/// POST /api/auth/verify
///
/// Password check without a session, used by the post editor.
pub async fn verify(
    State(state): State<AuthAppState>,
    JsonBody(req): JsonBody<PasswordRequest>,
) -> AuthResult<Json<SuccessResponse>> {
    if req.password.is_empty() {
        return Err(AuthError::InvalidRequest("password must not be empty".to_string()));
    }

    let use_case = SignInUseCase::new(state.config.clone());
    if !use_case.verify_password(&req.password) {
        return Err(AuthError::InvalidCredentials);
    }

    Ok(Json(SuccessResponse::ok()))
}

/// GET /api/auth/status
pub async fn session_status(
    State(state): State<AuthAppState>,
    headers: HeaderMap,
) -> Json<SessionStatusResponse> {
    let token = state.session_token(&headers);

    let use_case = CheckSessionUseCase::new(state.config.clone());

    match use_case.execute(token.as_deref()) {
        Some(info) => Json(SessionStatusResponse {
            authenticated: true,
            role: Some(info.role.code().to_string()),
            expires_at_ms: Some(info.expires_at_ms),
        }),
        None => Json(SessionStatusResponse {
            authenticated: false,
            role: None,
            expires_at_ms: None,
        }),
    }
}
