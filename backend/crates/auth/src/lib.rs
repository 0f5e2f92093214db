//! Auth (Admin Session) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Session role and token claims
//! - `application/` - Use cases (sign in, check session, sign out)
//! - `infra/` - JWT signing and verification
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Security Model
//! - A single administrative role, unlocked by a server-configured password
//! - Unconfigured deployments (no JWT secret or no password) reject every
//!   password: the gate fails closed
//! - Sessions are HS256 JWTs in an HTTP-only, SameSite=Lax cookie with a
//!   fixed 24h lifetime and no refresh
//! - Missing, forged and expired tokens are indistinguishable to callers

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use domain::value_object::session_role::SessionRole;
pub use error::{AuthError, AuthResult};
pub use presentation::handlers::AuthAppState;
pub use presentation::middleware::{AdminSession, require_admin};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod middleware {
    pub use crate::presentation::middleware::*;
}

#[cfg(test)]
mod tests;
