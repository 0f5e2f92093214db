//! Sign In Use Case
//!
//! Checks the admin password and issues a session token.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use platform::crypto::constant_time_eq;

use crate::application::config::AuthConfig;
use crate::domain::entity::session_claims::SessionClaims;
use crate::error::{AuthError, AuthResult};
use crate::infra::jwt::JwtSessionCodec;

/// Sign in input
pub struct SignInInput {
    pub password: String,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    /// Signed token for the session cookie
    pub session_token: String,
    pub expires_at_ms: i64,
}

/// Sign in use case
pub struct SignInUseCase {
    config: Arc<AuthConfig>,
}

impl SignInUseCase {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    pub fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        if !self.verify_password(&input.password) {
            return Err(AuthError::InvalidCredentials);
        }

        let output = self.create_session()?;

        tracing::info!(expires_at_ms = output.expires_at_ms, "Admin signed in");

        Ok(output)
    }

    /// Exact match against the configured password
    ///
    /// Always `false` while the secret or the password is unconfigured, for
    /// every input.
    pub fn verify_password(&self, candidate: &str) -> bool {
        let (Some(_), Some(password)) = (self.config.secret(), self.config.password()) else {
            tracing::warn!("Password verification attempted but auth is not configured");
            return false;
        };

        constant_time_eq(candidate.as_bytes(), password.as_bytes())
    }

    /// Issue a signed admin token valid for the configured TTL
    pub fn create_session(&self) -> AuthResult<SignInOutput> {
        self.create_session_at(Utc::now())
    }

    pub fn create_session_at(&self, now: DateTime<Utc>) -> AuthResult<SignInOutput> {
        if !self.config.is_configured() {
            return Err(AuthError::NotConfigured);
        }
        let secret = self.config.secret().ok_or(AuthError::NotConfigured)?;

        let claims = SessionClaims::admin(now, self.config.session_ttl_chrono());
        let session_token = JwtSessionCodec::new(secret).sign(&claims)?;

        Ok(SignInOutput {
            session_token,
            expires_at_ms: claims.expires_at_ms(),
        })
    }
}
