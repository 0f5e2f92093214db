//! Application Configuration

use platform::rate_limit::{RateLimitConfig, SUMMARY_RATE_LIMIT};

/// Rate-limit key prefix for summary generation
pub const SUMMARY_RATE_LIMIT_PURPOSE: &str = "summary";

pub const DEFAULT_SUMMARY_MODEL: &str = "claude-haiku-4-5";

/// Summary application configuration
#[derive(Debug, Clone)]
pub struct SummaryConfig {
    pub model: String,
    pub max_tokens: u32,
    /// Generation limit per client address
    pub rate_limit: RateLimitConfig,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_SUMMARY_MODEL.to_string(),
            max_tokens: 300,
            rate_limit: SUMMARY_RATE_LIMIT,
        }
    }
}
