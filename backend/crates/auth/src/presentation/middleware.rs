//! Auth Middleware
//!
//! Gates admin routes behind a valid session cookie.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::application::CheckSessionUseCase;
use crate::domain::value_object::session_role::SessionRole;
use crate::error::AuthError;
use crate::presentation::handlers::AuthAppState;

/// Verified session, stored in request extensions for downstream handlers
#[derive(Debug, Clone, Copy)]
pub struct AdminSession {
    pub role: SessionRole,
    pub expires_at_ms: i64,
}

/// Middleware that requires a valid admin session
///
/// Every failure produces the same 401.
///
/// ```ignore
/// Router::new()
///     .route("/subscribers", get(list_subscribers))
///     .route_layer(axum::middleware::from_fn_with_state(auth_state, require_admin));
/// ```
pub async fn require_admin(
    State(state): State<AuthAppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let token = state.session_token(req.headers());

    let use_case = CheckSessionUseCase::new(state.config.clone());
    let info = use_case
        .execute(token.as_deref())
        .filter(|info| info.role == SessionRole::Admin)
        .ok_or(AuthError::SessionInvalid)?;

    req.extensions_mut().insert(AdminSession {
        role: info.role,
        expires_at_ms: info.expires_at_ms,
    });

    Ok(next.run(req).await)
}
