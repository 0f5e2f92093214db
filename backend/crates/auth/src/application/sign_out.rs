//! Sign Out Use Case
//!
//! Tokens are self-contained, so signing out only clears the cookie.
//! A copied token stays valid until it expires.

use std::sync::Arc;

use crate::application::config::AuthConfig;

/// Sign out use case
pub struct SignOutUseCase {
    config: Arc<AuthConfig>,
}

impl SignOutUseCase {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// `Set-Cookie` value that removes the session cookie
    ///
    /// Idempotent and infallible: works the same whether or not a session
    /// cookie was sent.
    pub fn execute(&self, token: Option<&str>) -> String {
        if token.is_some() {
            tracing::info!("Admin signed out");
        } else {
            tracing::debug!("Sign out without a session cookie");
        }

        self.config.cookie().build_delete_cookie()
    }
}
