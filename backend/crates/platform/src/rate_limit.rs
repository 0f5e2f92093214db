//! Rate Limiting Infrastructure
//!
//! Fixed-window request counter keyed by an opaque string such as
//! `"subscribe:203.0.113.7"`. A window starts with the first request for a
//! key and ends hard at `reset_at_ms`; bursts up to `max_requests` are allowed
//! inside one window.
//!
//! State lives in a [`RateLimitStore`]. The default [`InMemoryRateLimitStore`]
//! is process-local and lost on restart, so multi-instance deployments need a
//! shared store implementation.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use axum::http::{HeaderName, HeaderValue};
use chrono::Utc;

pub const X_RATELIMIT_REMAINING: &str = "x-ratelimit-remaining";
pub const X_RATELIMIT_RESET: &str = "x-ratelimit-reset";

/// Sweep expired entries once more than this many keys are tracked.
pub const DEFAULT_SWEEP_THRESHOLD: usize = 10_000;

/// Newsletter sign-up: 5 requests per hour
pub const SUBSCRIBE_RATE_LIMIT: RateLimitConfig = RateLimitConfig {
    max_requests: 5,
    window: Duration::from_secs(60 * 60),
};

/// AI summary generation: 20 summaries per hour
pub const SUMMARY_RATE_LIMIT: RateLimitConfig = RateLimitConfig {
    max_requests: 20,
    window: Duration::from_secs(60 * 60),
};

/// Rate limit configuration
///
/// `max_requests` must be at least 1; zero is a caller error and is not
/// checked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Maximum requests allowed in the window
    pub max_requests: u32,
    /// Time window duration
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 10,
            window: Duration::from_secs(60),
        }
    }
}

impl RateLimitConfig {
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window: Duration::from_secs(window_secs),
        }
    }

    pub fn window_ms(&self) -> i64 {
        self.window.as_millis() as i64
    }
}

/// Rate limit check result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitResult {
    pub allowed: bool,
    pub remaining: u32,
    /// Absolute end of the current window (Unix timestamp ms)
    pub reset_at_ms: i64,
}

impl RateLimitResult {
    /// `X-RateLimit-Remaining` / `X-RateLimit-Reset` response headers
    pub fn headers(&self) -> [(HeaderName, HeaderValue); 2] {
        [
            (
                HeaderName::from_static(X_RATELIMIT_REMAINING),
                HeaderValue::from(self.remaining),
            ),
            (
                HeaderName::from_static(X_RATELIMIT_RESET),
                HeaderValue::from(self.reset_at_ms),
            ),
        ]
    }
}

/// Counter for one key inside its current window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitEntry {
    pub count: u32,
    pub reset_at_ms: i64,
}

impl RateLimitEntry {
    /// An entry is live up to and including `reset_at_ms`.
    pub fn is_expired(&self, now_ms: i64) -> bool {
        self.reset_at_ms < now_ms
    }
}

/// Storage backend for rate limit entries
///
/// [`RateLimiter`] holds the store behind a mutex and calls these methods
/// inside a single critical section, so implementations need no locking of
/// their own. A store shared between processes must provide its own
/// atomicity for the read-increment-write sequence.
pub trait RateLimitStore: Send {
    fn get(&self, key: &str) -> Option<RateLimitEntry>;

    fn set(&mut self, key: &str, entry: RateLimitEntry);

    /// Remove every entry whose window has passed; returns how many were removed.
    fn sweep_expired(&mut self, now_ms: i64) -> usize;

    /// Number of tracked keys, expired ones included
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-local store backed by a `HashMap`
#[derive(Debug, Default)]
pub struct InMemoryRateLimitStore {
    entries: HashMap<String, RateLimitEntry>,
}

impl InMemoryRateLimitStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RateLimitStore for InMemoryRateLimitStore {
    fn get(&self, key: &str) -> Option<RateLimitEntry> {
        self.entries.get(key).copied()
    }

    fn set(&mut self, key: &str, entry: RateLimitEntry) {
        match self.entries.get_mut(key) {
            Some(existing) => *existing = entry,
            None => {
                self.entries.insert(key.to_string(), entry);
            }
        }
    }

    fn sweep_expired(&mut self, now_ms: i64) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now_ms));
        before - self.entries.len()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Fixed-window rate limiter
///
/// Share it as `Arc<RateLimiter>` between handlers.
pub struct RateLimiter<S = InMemoryRateLimitStore>
where
    S: RateLimitStore,
{
    store: Mutex<S>,
    sweep_threshold: usize,
}

impl Default for RateLimiter<InMemoryRateLimitStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl RateLimiter<InMemoryRateLimitStore> {
    /// In-memory limiter with the default sweep threshold
    pub fn new() -> Self {
        Self::with_store(InMemoryRateLimitStore::new(), DEFAULT_SWEEP_THRESHOLD)
    }

    pub fn in_memory(sweep_threshold: usize) -> Self {
        Self::with_store(InMemoryRateLimitStore::new(), sweep_threshold)
    }
}

impl<S> RateLimiter<S>
where
    S: RateLimitStore,
{
    pub fn with_store(store: S, sweep_threshold: usize) -> Self {
        Self {
            store: Mutex::new(store),
            sweep_threshold,
        }
    }

    /// Record one request for `key` and decide whether it is allowed.
    pub fn check(&self, key: &str, config: &RateLimitConfig) -> RateLimitResult {
        self.check_at(key, config, Utc::now().timestamp_millis())
    }

    /// [`check`](Self::check) with an explicit clock.
    pub fn check_at(&self, key: &str, config: &RateLimitConfig, now_ms: i64) -> RateLimitResult {
        // A poisoned lock still holds a consistent map: every mutation is a
        // single `set` or `retain`.
        let mut store = self
            .store
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if store.len() > self.sweep_threshold {
            let removed = store.sweep_expired(now_ms);
            tracing::debug!(
                removed,
                remaining = store.len(),
                "Swept expired rate limit entries"
            );
        }

        let live = store.get(key).filter(|entry| !entry.is_expired(now_ms));

        match live {
            None => {
                let reset_at_ms = now_ms + config.window_ms();
                store.set(
                    key,
                    RateLimitEntry {
                        count: 1,
                        reset_at_ms,
                    },
                );
                RateLimitResult {
                    allowed: true,
                    remaining: config.max_requests.saturating_sub(1),
                    reset_at_ms,
                }
            }
            Some(entry) if entry.count >= config.max_requests => {
                tracing::debug!(key, reset_at_ms = entry.reset_at_ms, "Rate limit exceeded");
                RateLimitResult {
                    allowed: false,
                    remaining: 0,
                    reset_at_ms: entry.reset_at_ms,
                }
            }
            Some(entry) => {
                let count = entry.count + 1;
                store.set(
                    key,
                    RateLimitEntry {
                        count,
                        reset_at_ms: entry.reset_at_ms,
                    },
                );
                RateLimitResult {
                    allowed: true,
                    remaining: config.max_requests - count,
                    reset_at_ms: entry.reset_at_ms,
                }
            }
        }
    }

    /// Number of keys currently held by the store
    pub fn tracked_keys(&self) -> usize {
        self.store
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    const NOW: i64 = 1_700_000_000_000;

    fn config(max_requests: u32) -> RateLimitConfig {
        RateLimitConfig::new(max_requests, 60)
    }

    #[test]
    fn test_first_request_opens_window() {
        let limiter = RateLimiter::new();
        let result = limiter.check_at("subscribe:1.2.3.4", &config(5), NOW);

        assert!(result.allowed);
        assert_eq!(result.remaining, 4);
        assert_eq!(result.reset_at_ms, NOW + 60_000);
    }

    #[test]
    fn test_allows_up_to_max_then_rejects() {
        let limiter = RateLimiter::new();
        let cfg = config(3);

        for n in 1..=3u32 {
            let result = limiter.check_at("k", &cfg, NOW + n as i64);
            assert!(result.allowed, "request {n} should pass");
            assert_eq!(result.remaining, 3 - n);
            assert_eq!(result.reset_at_ms, NOW + 1 + 60_000);
        }

        let rejected = limiter.check_at("k", &cfg, NOW + 10);
        assert!(!rejected.allowed);
        assert_eq!(rejected.remaining, 0);
        assert_eq!(rejected.reset_at_ms, NOW + 1 + 60_000);

        // Rejections do not move the window
        let again = limiter.check_at("k", &cfg, NOW + 20);
        assert!(!again.allowed);
        assert_eq!(again.reset_at_ms, rejected.reset_at_ms);
    }

    #[test]
    fn test_window_resets_after_reset_time() {
        let limiter = RateLimiter::new();
        let cfg = config(2);

        limiter.check_at("k", &cfg, NOW);
        limiter.check_at("k", &cfg, NOW);
        assert!(!limiter.check_at("k", &cfg, NOW).allowed);

        // Still inside the window at exactly reset time
        assert!(!limiter.check_at("k", &cfg, NOW + 60_000).allowed);

        let fresh = limiter.check_at("k", &cfg, NOW + 60_001);
        assert!(fresh.allowed);
        assert_eq!(fresh.remaining, 1);
        assert_eq!(fresh.reset_at_ms, NOW + 60_001 + 60_000);
    }

    #[test]
    fn test_keys_are_independent() {
        let limiter = RateLimiter::new();
        let cfg = config(1);

        assert!(limiter.check_at("summary:a", &cfg, NOW).allowed);
        assert!(!limiter.check_at("summary:a", &cfg, NOW).allowed);
        assert!(limiter.check_at("summary:b", &cfg, NOW).allowed);
        assert!(limiter.check_at("subscribe:a", &cfg, NOW).allowed);
    }

    #[test]
    fn test_sweep_runs_only_above_threshold() {
        let limiter = RateLimiter::in_memory(3);
        let cfg = config(1);

        for key in ["a", "b", "c", "d"] {
            limiter.check_at(key, &cfg, NOW);
        }
        assert_eq!(limiter.tracked_keys(), 4);

        // All four are expired now; the next call sweeps them before inserting
        limiter.check_at("e", &cfg, NOW + 120_000);
        assert_eq!(limiter.tracked_keys(), 1);
    }

    #[test]
    fn test_sweep_keeps_live_entries() {
        let limiter = RateLimiter::in_memory(1);
        let short = RateLimitConfig::new(1, 1);
        let long = RateLimitConfig::new(1, 3600);

        limiter.check_at("short", &short, NOW);
        limiter.check_at("long", &long, NOW);

        limiter.check_at("new", &short, NOW + 5_000);
        assert_eq!(limiter.tracked_keys(), 2);
        assert!(!limiter.check_at("long", &long, NOW + 5_000).allowed);
    }

    #[test]
    fn test_in_memory_store_direct() {
        let mut store = InMemoryRateLimitStore::new();
        assert!(store.is_empty());

        store.set(
            "k",
            RateLimitEntry {
                count: 1,
                reset_at_ms: NOW,
            },
        );
        store.set(
            "k",
            RateLimitEntry {
                count: 2,
                reset_at_ms: NOW,
            },
        );
        assert_eq!(store.get("k").map(|e| e.count), Some(2));
        assert_eq!(store.len(), 1);

        assert_eq!(store.sweep_expired(NOW), 0);
        assert_eq!(store.sweep_expired(NOW + 1), 1);
        assert!(store.get("k").is_none());
    }

    #[test]
    fn test_concurrent_checks_never_overcount() {
        let limiter = Arc::new(RateLimiter::new());
        let cfg = RateLimitConfig::new(50, 3600);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let limiter = Arc::clone(&limiter);
                std::thread::spawn(move || {
                    (0..20)
                        .filter(|_| limiter.check_at("shared", &cfg, NOW).allowed)
                        .count()
                })
            })
            .collect();

        let allowed: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(allowed, 50);
    }

    #[test]
    fn test_presets() {
        assert_eq!(SUBSCRIBE_RATE_LIMIT.max_requests, 5);
        assert_eq!(SUBSCRIBE_RATE_LIMIT.window_ms(), 3_600_000);
        assert_eq!(SUMMARY_RATE_LIMIT.max_requests, 20);
        assert_eq!(SUMMARY_RATE_LIMIT.window_ms(), 3_600_000);
    }

    #[test]
    fn test_result_headers() {
        let limiter = RateLimiter::new();
        let result = limiter.check_at("hdr", &config(3), NOW);

        let headers = result.headers();
        assert_eq!(headers[0].0.as_str(), "x-ratelimit-remaining");
        assert_eq!(headers[0].1, "2");
        assert_eq!(headers[1].0.as_str(), "x-ratelimit-reset");
        assert_eq!(headers[1].1, (NOW + 60_000).to_string().as_str());
    }
}
