//! Application Configuration

use platform::rate_limit::{RateLimitConfig, SUBSCRIBE_RATE_LIMIT};

/// Rate-limit key prefix for newsletter sign-ups
pub const SUBSCRIBE_RATE_LIMIT_PURPOSE: &str = "subscribe";

/// Engagement application configuration
#[derive(Debug, Clone)]
pub struct EngagementConfig {
    /// Sign-up limit per client address
    pub subscribe_rate_limit: RateLimitConfig,
}

impl Default for EngagementConfig {
    fn default() -> Self {
        Self {
            subscribe_rate_limit: SUBSCRIBE_RATE_LIMIT,
        }
    }
}
