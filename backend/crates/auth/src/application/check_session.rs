//! Check Session Use Case
//!
//! Verifies a session token taken from the request cookie.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::config::AuthConfig;
use crate::domain::value_object::session_role::SessionRole;
use crate::infra::jwt::JwtSessionCodec;

/// Session info output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInfoOutput {
    pub role: SessionRole,
    pub expires_at_ms: i64,
}

/// Check session use case
pub struct CheckSessionUseCase {
    config: Arc<AuthConfig>,
}

impl CheckSessionUseCase {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// Session info for a valid token, `None` otherwise
    ///
    /// Missing token, bad signature, malformed token, expiry and an
    /// unconfigured gate all end up as `None`. The reason is logged at debug
    /// level only.
    pub fn execute(&self, token: Option<&str>) -> Option<SessionInfoOutput> {
        self.execute_at(token, Utc::now())
    }

    pub fn execute_at(&self, token: Option<&str>, now: DateTime<Utc>) -> Option<SessionInfoOutput> {
        if !self.config.is_configured() {
            return None;
        }
        let secret = self.config.secret()?;
        let token = token.filter(|t| !t.is_empty())?;

        let claims = match JwtSessionCodec::new(secret).verify(token) {
            Ok(claims) => claims,
            Err(reason) => {
                tracing::debug!(?reason, "Rejected admin session token");
                return None;
            }
        };

        if claims.is_expired(now) {
            tracing::debug!(exp = claims.exp, "Admin session token expired");
            return None;
        }

        Some(SessionInfoOutput {
            role: claims.role,
            expires_at_ms: claims.expires_at_ms(),
        })
    }

    /// Role asserted by a valid token
    pub fn verify_session(&self, token: Option<&str>) -> Option<SessionRole> {
        self.execute(token).map(|info| info.role)
    }

    pub fn is_admin(&self, token: Option<&str>) -> bool {
        self.verify_session(token) == Some(SessionRole::Admin)
    }
}
