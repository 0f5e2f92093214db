//! Subscribe Use Case

use std::net::IpAddr;
use std::sync::Arc;

use chrono::Utc;
use platform::client::rate_limit_key;
use platform::rate_limit::{InMemoryRateLimitStore, RateLimitStore, RateLimiter};

use crate::application::config::{EngagementConfig, SUBSCRIBE_RATE_LIMIT_PURPOSE};
use crate::domain::entities::Subscriber;
use crate::domain::repository::SubscriberRepository;
use crate::domain::value_objects::Email;
use crate::error::{EngagementError, EngagementResult};

/// Subscribe input
pub struct SubscribeInput {
    pub email: String,
    pub client_ip: Option<IpAddr>,
}

/// Subscribe use case
pub struct SubscribeUseCase<R, S = InMemoryRateLimitStore>
where
    R: SubscriberRepository,
    S: RateLimitStore,
{
    repo: Arc<R>,
    limiter: Arc<RateLimiter<S>>,
    config: Arc<EngagementConfig>,
}

impl<R, S> SubscribeUseCase<R, S>
where
    R: SubscriberRepository,
    S: RateLimitStore,
{
    pub fn new(repo: Arc<R>, limiter: Arc<RateLimiter<S>>, config: Arc<EngagementConfig>) -> Self {
        Self {
            repo,
            limiter,
            config,
        }
    }

    /// Rate limit, validate, then insert
    ///
    /// Every attempt counts against the limit, including invalid and
    /// duplicate ones.
    pub async fn execute(&self, input: SubscribeInput) -> EngagementResult<Subscriber> {
        self.admit(input.client_ip)?;
        self.subscribe(&input.email).await
    }

    /// Spend one sign-up slot for this client
    pub fn admit(&self, client_ip: Option<IpAddr>) -> EngagementResult<()> {
        let key = rate_limit_key(SUBSCRIBE_RATE_LIMIT_PURPOSE, client_ip);
        let limit = self.limiter.check(&key, &self.config.subscribe_rate_limit);
        if !limit.allowed {
            return Err(EngagementError::RateLimited {
                reset_at_ms: limit.reset_at_ms,
            });
        }
        Ok(())
    }

    /// Validate and insert; call after [`admit`](Self::admit)
    pub async fn subscribe(&self, email: &str) -> EngagementResult<Subscriber> {
        let email = Email::new(email)?;

        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(EngagementError::AlreadySubscribed);
        }

        let subscriber = Subscriber::new(email, Utc::now());
        self.repo.create(&subscriber).await?;

        tracing::info!(subscriber_id = %subscriber.id, "New newsletter subscriber");

        Ok(subscriber)
    }
}
