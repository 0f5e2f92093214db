//! Session Claims Entity
//!
//! Payload of the signed session token. Self-contained: nothing about the
//! session is stored server-side, so expiry is the only way a token dies.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_object::session_role::SessionRole;

/// JWT claims for an admin session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub role: SessionRole,
    /// Issued at (Unix timestamp, seconds)
    pub iat: i64,
    /// Expiration (Unix timestamp, seconds)
    pub exp: i64,
}

impl SessionClaims {
    /// Claims for a new admin session issued at `now`
    pub fn admin(now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            role: SessionRole::Admin,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    /// Valid strictly before `exp`
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }

    pub fn expires_at_ms(&self) -> i64 {
        self.exp * 1000
    }
}
