//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};

use crate::presentation::handlers::{self, AuthAppState};

/// Routes mounted under `/api/auth`
pub fn auth_router(state: AuthAppState) -> Router {
    Router::new()
        .route("/login", post(handlers::login))
        .route("/logout", post(handlers::logout))
        .route("/verify", post(handlers::verify))
        .route("/status", get(handlers::session_status))
        .with_state(state)
}
