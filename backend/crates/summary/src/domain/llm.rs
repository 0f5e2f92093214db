//! LLM Client Trait

use crate::error::SummaryResult;

/// Single-turn completion request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub model: String,
    pub system: Option<String>,
    pub prompt: String,
    pub max_tokens: u32,
}

/// Generated text and total token usage (input + output)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
    pub tokens_used: u32,
}

/// Text-generation backend
#[trait_variant::make(LlmClient: Send)]
pub trait LocalLlmClient {
    async fn complete(&self, request: &CompletionRequest) -> SummaryResult<Completion>;
}
