//! Anthropic Messages API client

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::llm::{Completion, CompletionRequest, LlmClient};
use crate::error::{SummaryError, SummaryResult};

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com/v1";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Anthropic Messages API client
#[derive(Clone)]
pub struct AnthropicClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl AnthropicClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap_or_else(|e| {
                tracing::error!(error = %e, "Failed to build HTTP client with custom timeout, using default client");
                Client::new()
            });

        Self {
            client,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Set custom base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn messages_url(&self) -> String {
        format!("{}/messages", self.base_url.trim_end_matches('/'))
    }
}

impl std::fmt::Debug for AnthropicClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnthropicClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl LlmClient for AnthropicClient {
    async fn complete(&self, request: &CompletionRequest) -> SummaryResult<Completion> {
        let body = MessagesRequest::from(request);

        tracing::debug!(model = %body.model, max_tokens = body.max_tokens, "Sending request to Anthropic API");

        let response = self
            .client
            .post(self.messages_url())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(SummaryError::Upstream(format!("API error {}: {}", status, text)));
        }

        let parsed: MessagesResponse = response.json().await?;
        parsed.into_completion()
    }
}

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
    messages: [Message<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

impl<'a> From<&'a CompletionRequest> for MessagesRequest<'a> {
    fn from(request: &'a CompletionRequest) -> Self {
        Self {
            model: &request.model,
            max_tokens: request.max_tokens,
            system: request.system.as_deref(),
            messages: [Message {
                role: "user",
                content: &request.prompt,
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
    usage: Usage,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text { text: String },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
struct Usage {
    input_tokens: u32,
    output_tokens: u32,
}

impl MessagesResponse {
    /// First text block; a response without one is an upstream error
    fn into_completion(self) -> SummaryResult<Completion> {
        let text = self
            .content
            .into_iter()
            .find_map(|block| match block {
                ContentBlock::Text { text } => Some(text),
                ContentBlock::Other => None,
            })
            .ok_or_else(|| SummaryError::Upstream("response has no text content".to_string()))?;

        Ok(Completion {
            text,
            tokens_used: self.usage.input_tokens + self.usage.output_tokens,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_format() {
        let request = CompletionRequest {
            model: "claude-haiku-4-5".to_string(),
            system: Some("sys".to_string()),
            prompt: "hello".to_string(),
            max_tokens: 300,
        };

        let json = serde_json::to_value(MessagesRequest::from(&request)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "model": "claude-haiku-4-5",
                "max_tokens": 300,
                "system": "sys",
                "messages": [{"role": "user", "content": "hello"}],
            })
        );
    }

    #[test]
    fn test_request_without_system() {
        let request = CompletionRequest {
            model: "m".to_string(),
            system: None,
            prompt: "p".to_string(),
            max_tokens: 1,
        };
        let json = serde_json::to_value(MessagesRequest::from(&request)).unwrap();
        assert!(json.get("system").is_none());
    }

    #[test]
    fn test_response_parsing() {
        let response: MessagesResponse = serde_json::from_str(
            r#"{
                "id": "msg_1",
                "type": "message",
                "role": "assistant",
                "content": [{"type": "text", "text": "1. a\n2. b\n3. c"}],
                "usage": {"input_tokens": 120, "output_tokens": 30}
            }"#,
        )
        .unwrap();

        let completion = response.into_completion().unwrap();
        assert_eq!(completion.text, "1. a\n2. b\n3. c");
        assert_eq!(completion.tokens_used, 150);
    }

    #[test]
    fn test_response_without_text_is_error() {
        let response: MessagesResponse = serde_json::from_str(
            r#"{"content": [{"type": "tool_use", "id": "t", "name": "x", "input": {}}],
                "usage": {"input_tokens": 1, "output_tokens": 1}}"#,
        )
        .unwrap();

        assert!(matches!(
            response.into_completion(),
            Err(SummaryError::Upstream(_))
        ));
    }

    #[test]
    fn test_messages_url() {
        let client = AnthropicClient::new("sk-test-123").with_base_url("http://localhost:9999/v1/");
        assert_eq!(client.messages_url(), "http://localhost:9999/v1/messages");
        assert!(!format!("{:?}", client).contains("sk-test-123"));
    }
}
