//! Unit tests for summary crate

#[cfg(test)]
mod mock {
    use crate::domain::llm::{Completion, CompletionRequest, LlmClient};
    use crate::error::{SummaryError, SummaryResult};
    use platform::rate_limit::{InMemoryRateLimitStore, RateLimitEntry, RateLimitStore};
    use std::sync::{Arc, Mutex};

    /// Records requests and answers with a canned reply
    #[derive(Default)]
    pub struct MockLlm {
        pub fail: bool,
        pub requests: Mutex<Vec<CompletionRequest>>,
    }

    impl MockLlm {
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        pub fn calls(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    impl LlmClient for MockLlm {
        async fn complete(&self, request: &CompletionRequest) -> SummaryResult<Completion> {
            self.requests.lock().unwrap().push(request.clone());
            if self.fail {
                return Err(SummaryError::Upstream("boom".to_string()));
            }
            Ok(Completion {
                text: "1. 하나\n2. 둘\n3. 셋".to_string(),
                tokens_used: 42,
            })
        }
    }

    /// In-memory store that also records every key it writes
    #[derive(Default)]
    pub struct RecordingStore {
        inner: InMemoryRateLimitStore,
        pub written: Arc<Mutex<Vec<String>>>,
    }

    impl RateLimitStore for RecordingStore {
        fn get(&self, key: &str) -> Option<RateLimitEntry> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, entry: RateLimitEntry) {
            self.written.lock().unwrap().push(key.to_string());
            self.inner.set(key, entry);
        }

        fn sweep_expired(&mut self, now_ms: i64) -> usize {
            self.inner.sweep_expired(now_ms)
        }

        fn len(&self) -> usize {
            self.inner.len()
        }
    }
}

#[cfg(test)]
mod use_case_tests {
    use super::mock::MockLlm;
    use crate::application::config::SummaryConfig;
    use crate::application::{GenerateSummaryInput, GenerateSummaryUseCase};
    use crate::domain::services::SUMMARY_SYSTEM_PROMPT;
    use crate::error::SummaryError;
    use platform::rate_limit::{RateLimitConfig, RateLimiter};
    use std::sync::Arc;

    fn config(max: u32) -> Arc<SummaryConfig> {
        Arc::new(SummaryConfig {
            rate_limit: RateLimitConfig::new(max, 3600),
            ..Default::default()
        })
    }

    fn input(content_len: usize) -> GenerateSummaryInput {
        GenerateSummaryInput {
            title: "러스트 소유권".to_string(),
            content: "x".repeat(content_len),
            client_ip: Some("203.0.113.9".parse().unwrap()),
        }
    }

    #[tokio::test]
    async fn test_generates_summary() {
        let llm = Arc::new(MockLlm::default());
        let uc = GenerateSummaryUseCase::new(Some(llm.clone()), Arc::new(RateLimiter::new()), config(20));

        let output = uc.execute(input(500)).await.unwrap();
        assert_eq!(output.summary, "1. 하나\n2. 둘\n3. 셋");
        assert_eq!(output.tokens_used, 42);
        assert_eq!(output.rate_limit.remaining, 19);

        let requests = llm.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].max_tokens, 300);
        assert_eq!(requests[0].system.as_deref(), Some(SUMMARY_SYSTEM_PROMPT));
        assert!(requests[0].prompt.contains("제목: 러스트 소유권"));
    }

    #[tokio::test]
    async fn test_rate_limited_before_anything_else() {
        let llm = Arc::new(MockLlm::default());
        let uc = GenerateSummaryUseCase::new(Some(llm.clone()), Arc::new(RateLimiter::new()), config(1));

        uc.execute(input(500)).await.unwrap();
        // even an invalid request is rejected by the limiter first
        let result = uc.execute(input(1)).await;
        assert!(matches!(result, Err(SummaryError::RateLimited { .. })));
        assert_eq!(llm.calls(), 1);
    }

    #[tokio::test]
    async fn test_admission_spends_a_slot() {
        let llm = Arc::new(MockLlm::default());
        let uc = GenerateSummaryUseCase::new(Some(llm.clone()), Arc::new(RateLimiter::new()), config(2));

        uc.admit(None).unwrap();
        let admission = uc.admit(None).unwrap();
        assert!(matches!(uc.admit(None), Err(SummaryError::RateLimited { .. })));

        let output = uc.generate(admission, "제목", &"x".repeat(200)).await.unwrap();
        assert_eq!(output.rate_limit.remaining, 0);
        assert_eq!(llm.calls(), 1);
    }

    #[tokio::test]
    async fn test_unavailable_without_client() {
        let uc = GenerateSummaryUseCase::new(None::<Arc<MockLlm>>, Arc::new(RateLimiter::new()), config(20));
        assert!(matches!(
            uc.execute(input(500)).await,
            Err(SummaryError::Unavailable)
        ));
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_llm() {
        let llm = Arc::new(MockLlm::default());
        let uc = GenerateSummaryUseCase::new(Some(llm.clone()), Arc::new(RateLimiter::new()), config(20));

        assert!(matches!(
            uc.execute(input(99)).await,
            Err(SummaryError::InvalidRequest(_))
        ));
        assert_eq!(llm.calls(), 0);
    }

    #[tokio::test]
    async fn test_upstream_failure() {
        let llm = Arc::new(MockLlm::failing());
        let uc = GenerateSummaryUseCase::new(Some(llm), Arc::new(RateLimiter::new()), config(20));
        assert!(matches!(
            uc.execute(input(500)).await,
            Err(SummaryError::Upstream(_))
        ));
    }
}

#[cfg(test)]
mod router_tests {
    use super::mock::{MockLlm, RecordingStore};
    use crate::application::config::SummaryConfig;
    use crate::presentation::handlers::SummaryAppState;
    use crate::presentation::router::summary_router;
    use axum::body::Body;
    use axum::extract::ConnectInfo;
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use http_body_util::BodyExt;
    use platform::rate_limit::{RateLimitConfig, RateLimiter};
    use std::net::SocketAddr;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn request(content_len: usize) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/summary")
            .header(header::CONTENT_TYPE, "application/json")
            .extension(ConnectInfo(SocketAddr::from(([192, 0, 2, 7], 5555))))
            .body(Body::from(
                serde_json::json!({"title": "T", "content": "c".repeat(content_len)}).to_string(),
            ))
            .unwrap()
    }

    fn raw_request(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/summary")
            .header(header::CONTENT_TYPE, "application/json")
            .extension(ConnectInfo(SocketAddr::from(([192, 0, 2, 7], 5555))))
            .body(Body::from(body))
            .unwrap()
    }

    fn config(max: u32) -> SummaryConfig {
        SummaryConfig {
            rate_limit: RateLimitConfig::new(max, 3600),
            ..Default::default()
        }
    }

    fn state(client: Option<MockLlm>, max: u32) -> SummaryAppState<MockLlm> {
        SummaryAppState::new(client, Arc::new(RateLimiter::new()), config(max))
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_success_carries_rate_limit_headers() {
        let app = summary_router(state(Some(MockLlm::default()), 20));

        let response = app.oneshot(request(200)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["x-ratelimit-remaining"], "19");
        assert!(response.headers().contains_key("x-ratelimit-reset"));

        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["tokensUsed"], 42);
    }

    #[tokio::test]
    async fn test_rate_limited_response() {
        let app = summary_router(state(Some(MockLlm::default()), 1));

        app.clone().oneshot(request(200)).await.unwrap();
        let response = app.oneshot(request(200)).await.unwrap();

        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(response.headers()["x-ratelimit-remaining"], "0");
        let reset: i64 = response.headers()["x-ratelimit-reset"]
            .to_str()
            .unwrap()
            .parse()
            .unwrap();

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "요청 한도를 초과했습니다. 잠시 후 다시 시도해주세요.");
        assert_eq!(body["resetTime"], reset);
    }

    #[tokio::test]
    async fn test_unavailable_is_503() {
        let app = summary_router(state(None, 20));
        let response = app.oneshot(request(200)).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = body_json(response).await;
        assert_eq!(body["error"], "AI 기능을 사용할 수 없습니다.");
    }

    #[tokio::test]
    async fn test_invalid_input_is_400() {
        let app = summary_router(state(Some(MockLlm::default()), 20));
        let response = app.oneshot(request(10)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upstream_failure_is_502_without_details() {
        let app = summary_router(state(Some(MockLlm::failing()), 20));
        let response = app.oneshot(request(200)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = body_json(response).await;
        assert_eq!(body["error"], "요약을 생성하는 중 오류가 발생했습니다.");
    }

    #[tokio::test]
    async fn test_malformed_body_is_400_json() {
        let app = summary_router(state(Some(MockLlm::default()), 20));

        for body in ["{}", r#"{"title":"T"}"#, r#"{"title":1,"content":"c"}"#, "nope"] {
            let response = app.clone().oneshot(raw_request(body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
            assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");

            let json = body_json(response).await;
            assert_eq!(json["success"], false, "{body}");
            assert!(json["error"].as_str().unwrap().starts_with("잘못된 요청입니다"));
        }
    }

    #[tokio::test]
    async fn test_malformed_body_spends_a_slot() {
        let llm = MockLlm::default();
        let app = summary_router(state(Some(llm), 1));

        let first = app.clone().oneshot(raw_request("{}")).await.unwrap();
        assert_eq!(first.status(), StatusCode::BAD_REQUEST);

        let second = app.oneshot(request(200)).await.unwrap();
        assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[tokio::test]
    async fn test_state_accepts_custom_store() {
        let store = RecordingStore::default();
        let written = store.written.clone();
        let limiter = Arc::new(RateLimiter::with_store(store, 100));
        let app = summary_router(SummaryAppState::new(Some(MockLlm::default()), limiter, config(20)));

        let response = app.oneshot(request(200)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(*written.lock().unwrap(), vec!["summary:192.0.2.7".to_string()]);
    }
}
