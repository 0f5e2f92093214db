//! Summary Router

use axum::{Router, routing::post};
use platform::rate_limit::RateLimitStore;

use crate::domain::llm::LlmClient;
use crate::presentation::handlers::{self, SummaryAppState};

/// Routes mounted under `/api/ai`
pub fn summary_router<C, S>(state: SummaryAppState<C, S>) -> Router
where
    C: LlmClient + Send + Sync + 'static,
    S: RateLimitStore + 'static,
{
    Router::new()
        .route("/summary", post(handlers::generate_summary::<C, S>))
        .with_state(state)
}
