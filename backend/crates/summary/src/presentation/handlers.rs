//! HTTP Handlers

use axum::Json;
use axum::extract::{ConnectInfo, State};
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use platform::client::extract_client_ip;
use platform::rate_limit::{InMemoryRateLimitStore, RateLimitStore, RateLimiter};
use std::net::SocketAddr;
use std::sync::Arc;

use crate::application::GenerateSummaryUseCase;
use crate::application::config::SummaryConfig;
use crate::domain::llm::LlmClient;
use crate::error::{SummaryError, SummaryResult};
use crate::presentation::dto::{SummaryRequest, SummaryResponse};
use crate::presentation::extract::JsonBody;

/// Shared state for the summary handler
pub struct SummaryAppState<C, S = InMemoryRateLimitStore>
where
    C: LlmClient + Send + Sync + 'static,
    S: RateLimitStore + 'static,
{
    /// `None` when no API key is configured
    pub client: Option<Arc<C>>,
    pub limiter: Arc<RateLimiter<S>>,
    pub config: Arc<SummaryConfig>,
}

impl<C, S> Clone for SummaryAppState<C, S>
where
    C: LlmClient + Send + Sync + 'static,
    S: RateLimitStore + 'static,
{
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            limiter: self.limiter.clone(),
            config: self.config.clone(),
        }
    }
}

impl<C, S> SummaryAppState<C, S>
where
    C: LlmClient + Send + Sync + 'static,
    S: RateLimitStore + 'static,
{
    pub fn new(client: Option<C>, limiter: Arc<RateLimiter<S>>, config: SummaryConfig) -> Self {
        Self {
            client: client.map(Arc::new),
            limiter,
            config: Arc::new(config),
        }
    }
}

/// POST /api/ai/summary
///
/// The limiter runs before the body is inspected.
pub async fn generate_summary<C, S>(
    State(state): State<SummaryAppState<C, S>>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    body: Result<JsonBody<SummaryRequest>, SummaryError>,
) -> SummaryResult<impl IntoResponse>
where
    C: LlmClient + Send + Sync + 'static,
    S: RateLimitStore + 'static,
{
    let client_ip = extract_client_ip(&headers, Some(addr.ip()));

    let use_case =
        GenerateSummaryUseCase::new(state.client.clone(), state.limiter.clone(), state.config.clone());
    let admission = use_case.admit(client_ip)?;
    let JsonBody(req) = body?;
    let output = use_case.generate(admission, &req.title, &req.content).await?;

    Ok((
        output.rate_limit.headers(),
        Json(SummaryResponse {
            success: true,
            summary: output.summary,
            tokens_used: output.tokens_used,
        }),
    ))
}
