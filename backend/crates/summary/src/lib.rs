//! AI Summary Backend Module
//!
//! Three-line Korean summaries of blog posts, generated by an LLM.
//!
//! Clean Architecture structure:
//! - `domain/` - LLM client trait, prompt construction, input limits
//! - `application/` - Summary use case
//! - `infra/` - Anthropic Messages API client
//! - `presentation/` - HTTP handler
//!
//! Generation is rate limited per client address (20/hour) because every
//! call costs tokens.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::SummaryConfig;
pub use domain::llm::{Completion, CompletionRequest, LlmClient};
pub use error::{SummaryError, SummaryResult};
pub use infra::anthropic::AnthropicClient;
pub use presentation::handlers::SummaryAppState;
pub use presentation::router::summary_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[cfg(test)]
mod tests;
