//! Server Configuration
//!
//! Read once at startup from the environment (after `.env` is loaded).

use anyhow::Context;
use std::net::SocketAddr;
use std::path::PathBuf;

use platform::rate_limit::DEFAULT_SWEEP_THRESHOLD;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_CONTENT_DIR: &str = "content";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

/// Process-wide settings
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    /// Missing or empty disables admin login
    pub jwt_secret: Option<String>,
    /// Missing or empty disables admin login
    pub admin_password: Option<String>,
    pub content_dir: PathBuf,
    /// Missing disables AI summaries (503)
    pub anthropic_api_key: Option<String>,
    pub summary_model: Option<String>,
    pub frontend_origins: Vec<String>,
    pub bind_addr: SocketAddr,
    pub rate_limit_sweep_threshold: usize,
    /// `APP_ENV=production`; enables Secure cookies
    pub production: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset
    ///
    /// Secrets keep their exact value, surrounding whitespace included.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let secret = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = get("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

        let bind_addr: SocketAddr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR must be a socket address such as 0.0.0.0:31113")?;

        let rate_limit_sweep_threshold: usize = match get("RATE_LIMIT_SWEEP_THRESHOLD") {
            Some(v) => v
                .parse()
                .context("RATE_LIMIT_SWEEP_THRESHOLD must be a non-negative integer")?,
            None => DEFAULT_SWEEP_THRESHOLD,
        };

        let frontend_origins = get("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Self {
            database_url,
            jwt_secret: secret("JWT_SECRET"),
            admin_password: secret("ADMIN_PASSWORD"),
            content_dir: get("CONTENT_DIR")
                .unwrap_or_else(|| DEFAULT_CONTENT_DIR.to_string())
                .into(),
            anthropic_api_key: secret("ANTHROPIC_API_KEY"),
            summary_model: get("SUMMARY_MODEL"),
            frontend_origins,
            bind_addr,
            rate_limit_sweep_threshold,
            production: get("APP_ENV").is_some_and(|v| v.eq_ignore_ascii_case("production")),
        })
    }

    pub fn auth_configured(&self) -> bool {
        self.jwt_secret.is_some() && self.admin_password.is_some()
    }
}
