//! Generate Summary Use Case

use std::net::IpAddr;
use std::sync::Arc;

use platform::client::rate_limit_key;
use platform::rate_limit::{InMemoryRateLimitStore, RateLimitResult, RateLimitStore, RateLimiter};

use crate::application::config::{SUMMARY_RATE_LIMIT_PURPOSE, SummaryConfig};
use crate::domain::llm::{CompletionRequest, LlmClient};
use crate::domain::services::{SUMMARY_SYSTEM_PROMPT, build_summary_prompt, validate_summary_input};
use crate::error::{SummaryError, SummaryResult};

/// Generate summary input
pub struct GenerateSummaryInput {
    pub title: String,
    pub content: String,
    pub client_ip: Option<IpAddr>,
}

/// Generate summary output
#[derive(Debug, Clone)]
pub struct GenerateSummaryOutput {
    pub summary: String,
    pub tokens_used: u32,
    /// Limiter state after this request, for response headers
    pub rate_limit: RateLimitResult,
}

/// Request that passed the limiter and found a configured client
pub struct Admission<'a, C> {
    client: &'a C,
    rate_limit: RateLimitResult,
}

/// Generate summary use case
pub struct GenerateSummaryUseCase<C, S = InMemoryRateLimitStore>
where
    C: LlmClient,
    S: RateLimitStore,
{
    client: Option<Arc<C>>,
    limiter: Arc<RateLimiter<S>>,
    config: Arc<SummaryConfig>,
}

impl<C, S> GenerateSummaryUseCase<C, S>
where
    C: LlmClient + Sync,
    S: RateLimitStore,
{
    /// `client` is `None` when no API key is configured
    pub fn new(client: Option<Arc<C>>, limiter: Arc<RateLimiter<S>>, config: Arc<SummaryConfig>) -> Self {
        Self {
            client,
            limiter,
            config,
        }
    }

    /// Rate limit, then availability, then input checks, then generation
    pub async fn execute(&self, input: GenerateSummaryInput) -> SummaryResult<GenerateSummaryOutput> {
        let admission = self.admit(input.client_ip)?;
        self.generate(admission, &input.title, &input.content).await
    }

    /// Spend one rate limit slot and resolve the client
    ///
    /// Runs before the request body is looked at, so malformed requests
    /// count against the limit too.
    pub fn admit(&self, client_ip: Option<IpAddr>) -> SummaryResult<Admission<'_, C>> {
        let key = rate_limit_key(SUMMARY_RATE_LIMIT_PURPOSE, client_ip);
        let rate_limit = self.limiter.check(&key, &self.config.rate_limit);
        if !rate_limit.allowed {
            return Err(SummaryError::RateLimited {
                reset_at_ms: rate_limit.reset_at_ms,
            });
        }

        let client = self.client.as_deref().ok_or(SummaryError::Unavailable)?;

        Ok(Admission { client, rate_limit })
    }

    pub async fn generate(
        &self,
        admission: Admission<'_, C>,
        title: &str,
        content: &str,
    ) -> SummaryResult<GenerateSummaryOutput> {
        validate_summary_input(title, content)?;

        let request = CompletionRequest {
            model: self.config.model.clone(),
            system: Some(SUMMARY_SYSTEM_PROMPT.to_string()),
            prompt: build_summary_prompt(title, content),
            max_tokens: self.config.max_tokens,
        };

        let completion = admission.client.complete(&request).await?;

        tracing::info!(
            tokens_used = completion.tokens_used,
            remaining = admission.rate_limit.remaining,
            "Generated post summary"
        );

        Ok(GenerateSummaryOutput {
            summary: completion.text,
            tokens_used: completion.tokens_used,
            rate_limit: admission.rate_limit,
        })
    }
}
