//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::cookie::CookieConfig;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// HS256 signing secret; `None` or empty disables login
    pub jwt_secret: Option<String>,
    /// Admin password; `None` or empty disables login
    pub admin_password: Option<String>,
    /// Session lifetime (fixed, no refresh)
    pub session_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "admin-token".to_string(),
            jwt_secret: None,
            admin_password: None,
            session_ttl: Duration::from_secs(24 * 3600), // 24 hours
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
        }
    }
}

impl AuthConfig {
    /// Config from already-loaded settings
    pub fn new(
        jwt_secret: Option<String>,
        admin_password: Option<String>,
        cookie_secure: bool,
    ) -> Self {
        Self {
            jwt_secret,
            admin_password,
            cookie_secure,
            ..Default::default()
        }
    }

    /// Both the secret and the password are present and non-empty
    pub fn is_configured(&self) -> bool {
        self.secret().is_some() && self.password().is_some()
    }

    pub fn secret(&self) -> Option<&str> {
        self.jwt_secret.as_deref().filter(|s| !s.is_empty())
    }

    pub fn password(&self) -> Option<&str> {
        self.admin_password.as_deref().filter(|s| !s.is_empty())
    }

    pub fn session_ttl_chrono(&self) -> chrono::Duration {
        chrono::Duration::from_std(self.session_ttl).unwrap_or_else(|_| chrono::Duration::hours(24))
    }

    /// Cookie settings for the session cookie
    pub fn cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.session_ttl.as_secs() as i64),
        }
    }
}
