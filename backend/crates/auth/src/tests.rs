//! Unit tests for auth crate

#[cfg(test)]
mod password_tests {
    use crate::application::SignInUseCase;
    use crate::application::config::AuthConfig;
    use std::sync::Arc;

    fn use_case(secret: Option<&str>, password: Option<&str>) -> SignInUseCase {
        SignInUseCase::new(Arc::new(AuthConfig::new(
            secret.map(str::to_string),
            password.map(str::to_string),
            false,
        )))
    }

    #[test]
    fn test_correct_password_accepted() {
        assert!(use_case(Some("s3cret"), Some("hunter2")).verify_password("hunter2"));
    }

    #[test]
    fn test_wrong_password_rejected() {
        let uc = use_case(Some("s3cret"), Some("hunter2"));
        assert!(!uc.verify_password("hunter3"));
        assert!(!uc.verify_password(""));
        assert!(!uc.verify_password("hunter2 "));
    }

    #[test]
    fn test_empty_secret_rejects_even_correct_password() {
        assert!(!use_case(Some(""), Some("hunter2")).verify_password("hunter2"));
        assert!(!use_case(None, Some("hunter2")).verify_password("hunter2"));
    }

    #[test]
    fn test_missing_password_rejects_everything() {
        let uc = use_case(Some("s3cret"), None);
        assert!(!uc.verify_password(""));
        assert!(!uc.verify_password("anything"));
    }

    #[test]
    fn test_create_session_requires_configuration() {
        let uc = use_case(None, Some("hunter2"));
        assert!(matches!(
            uc.create_session(),
            Err(crate::error::AuthError::NotConfigured)
        ));
    }
}

#[cfg(test)]
mod session_tests {
    use crate::application::config::AuthConfig;
    use crate::application::{CheckSessionUseCase, SignInInput, SignInUseCase, SignOutUseCase};
    use crate::domain::value_object::session_role::SessionRole;
    use crate::error::AuthError;
    use axum::http::{HeaderMap, header};
    use chrono::{Duration, Utc};
    use platform::cookie::extract_cookie;
    use std::sync::Arc;

    fn config(secret: &str) -> Arc<AuthConfig> {
        Arc::new(AuthConfig::new(
            Some(secret.to_string()),
            Some("hunter2".to_string()),
            false,
        ))
    }

    #[test]
    fn test_sign_in_then_verify_yields_admin() {
        let config = config("s3cret");
        let output = SignInUseCase::new(config.clone())
            .execute(SignInInput {
                password: "hunter2".to_string(),
            })
            .unwrap();

        let check = CheckSessionUseCase::new(config);
        assert_eq!(
            check.verify_session(Some(&output.session_token)),
            Some(SessionRole::Admin)
        );
        assert!(check.is_admin(Some(&output.session_token)));
    }

    #[test]
    fn test_sign_in_wrong_password() {
        let result = SignInUseCase::new(config("s3cret")).execute(SignInInput {
            password: "nope".to_string(),
        });
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[test]
    fn test_expiry_is_24_hours() {
        let now = Utc::now();
        let output = SignInUseCase::new(config("s3cret"))
            .create_session_at(now)
            .unwrap();
        let expected = (now + Duration::hours(24)).timestamp() * 1000;
        assert_eq!(output.expires_at_ms, expected);
    }

    #[test]
    fn test_token_from_other_secret_rejected() {
        let forged = SignInUseCase::new(config("attacker"))
            .create_session()
            .unwrap();
        let check = CheckSessionUseCase::new(config("s3cret"));
        assert_eq!(check.verify_session(Some(&forged.session_token)), None);
    }

    #[test]
    fn test_expired_token_rejected() {
        let config = config("s3cret");
        let issued = Utc::now() - Duration::hours(25);
        let output = SignInUseCase::new(config.clone())
            .create_session_at(issued)
            .unwrap();

        let check = CheckSessionUseCase::new(config);
        assert_eq!(check.verify_session(Some(&output.session_token)), None);
    }

    #[test]
    fn test_token_rejected_at_exact_expiry() {
        let config = config("s3cret");
        let now = Utc::now();
        let output = SignInUseCase::new(config.clone())
            .create_session_at(now)
            .unwrap();

        let check = CheckSessionUseCase::new(config);
        let just_before = now + Duration::hours(24) - Duration::seconds(1);
        assert!(
            check
                .execute_at(Some(&output.session_token), just_before)
                .is_some()
        );
        assert!(
            check
                .execute_at(Some(&output.session_token), now + Duration::hours(24))
                .is_none()
        );
    }

    #[test]
    fn test_missing_and_garbage_tokens_rejected() {
        let check = CheckSessionUseCase::new(config("s3cret"));
        assert_eq!(check.verify_session(None), None);
        assert_eq!(check.verify_session(Some("")), None);
        assert_eq!(check.verify_session(Some("not-a-jwt")), None);
        assert_eq!(check.verify_session(Some("a.b.c")), None);
    }

    #[test]
    fn test_unconfigured_gate_rejects_valid_token() {
        let output = SignInUseCase::new(config("s3cret"))
            .create_session()
            .unwrap();

        let unconfigured = Arc::new(AuthConfig::new(Some("s3cret".to_string()), None, false));
        let check = CheckSessionUseCase::new(unconfigured);
        assert_eq!(check.verify_session(Some(&output.session_token)), None);
    }

    #[test]
    fn test_sign_out_clears_cookie() {
        let cookie = SignOutUseCase::new(config("s3cret")).execute(None);
        assert!(cookie.starts_with("admin-token=;"));
        assert!(cookie.contains("Max-Age=0"));
        assert!(cookie.contains("HttpOnly"));
    }

    #[test]
    fn test_session_gone_after_sign_out() {
        let config = config("s3cret");
        let output = SignInUseCase::new(config.clone())
            .create_session()
            .unwrap();

        let cleared = SignOutUseCase::new(config.clone()).execute(Some(&output.session_token));
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, cleared.split(';').next().unwrap().parse().unwrap());
        let token = extract_cookie(&headers, "admin-token");

        assert_eq!(token, None);
        assert_eq!(
            CheckSessionUseCase::new(config).verify_session(token.as_deref()),
            None
        );
    }
}

#[cfg(test)]
mod router_tests {
    use crate::application::config::AuthConfig;
    use crate::presentation::handlers::AuthAppState;
    use crate::presentation::middleware::{AdminSession, require_admin};
    use crate::presentation::router::auth_router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::routing::get;
    use axum::{Extension, Router};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn state() -> AuthAppState {
        AuthAppState::new(AuthConfig::new(
            Some("s3cret".to_string()),
            Some("hunter2".to_string()),
            true,
        ))
    }

    fn login_request(password: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                serde_json::json!({ "password": password }).to_string(),
            ))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn login_cookie(state: &AuthAppState) -> String {
        let response = auth_router(state.clone())
            .oneshot(login_request("hunter2"))
            .await
            .unwrap();
        let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        set_cookie.split(';').next().unwrap().to_string()
    }

    fn admin_app(state: AuthAppState) -> Router {
        Router::new()
            .route(
                "/secret",
                get(|Extension(session): Extension<AdminSession>| async move {
                    session.role.code().to_string()
                }),
            )
            .route_layer(axum::middleware::from_fn_with_state(state, require_admin))
    }

    #[tokio::test]
    async fn test_login_sets_session_cookie() {
        let response = auth_router(state())
            .oneshot(login_request("hunter2"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        assert!(set_cookie.starts_with("admin-token="));
        assert!(set_cookie.contains("HttpOnly"));
        assert!(set_cookie.contains("Secure"));
        assert!(set_cookie.contains("SameSite=Lax"));
        assert!(set_cookie.contains("Path=/"));
        assert!(set_cookie.contains("Max-Age=86400"));

        let body = body_json(response).await;
        assert_eq!(body["success"], true);
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_401() {
        let response = auth_router(state())
            .oneshot(login_request("wrong"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }

    #[tokio::test]
    async fn test_login_empty_password_is_400() {
        let response = auth_router(state())
            .oneshot(login_request(""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    fn raw_post(uri: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_malformed_body_is_400_problem() {
        for (uri, body) in [
            ("/login", "{}"),
            ("/login", r#"{"password":123}"#),
            ("/login", "not json"),
            ("/verify", "{}"),
        ] {
            let response = auth_router(state()).oneshot(raw_post(uri, body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri} {body}");
            assert_eq!(
                response.headers()[header::CONTENT_TYPE],
                "application/json",
                "{uri} {body}"
            );
            assert!(response.headers().get(header::SET_COOKIE).is_none());

            let problem = body_json(response).await;
            assert_eq!(problem["status"], 400);
            assert_eq!(problem["title"], "Bad Request");
        }
    }

    #[tokio::test]
    async fn test_login_unconfigured_is_401() {
        let state = AuthAppState::new(AuthConfig::new(None, Some("hunter2".to_string()), true));
        let response = auth_router(state)
            .oneshot(login_request("hunter2"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_logout_always_succeeds() {
        let response = auth_router(state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/logout")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        assert!(set_cookie.contains("Max-Age=0"));
    }

    #[tokio::test]
    async fn test_verify_endpoint() {
        let ok = auth_router(state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/verify")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"password":"hunter2"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(ok.status(), StatusCode::OK);
        assert!(ok.headers().get(header::SET_COOKIE).is_none());

        let bad = auth_router(state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/verify")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"password":"nope"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(bad.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_status_reflects_cookie() {
        let state = state();
        let cookie = login_cookie(&state).await;

        let response = auth_router(state.clone())
            .oneshot(
                Request::builder()
                    .uri("/status")
                    .header(header::COOKIE, &cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["authenticated"], true);
        assert_eq!(body["role"], "admin");

        let response = auth_router(state)
            .oneshot(Request::builder().uri("/status").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["authenticated"], false);
        assert!(body["role"].is_null());
    }

    #[tokio::test]
    async fn test_require_admin_passes_valid_session() {
        let state = state();
        let cookie = login_cookie(&state).await;

        let response = admin_app(state)
            .oneshot(
                Request::builder()
                    .uri("/secret")
                    .header(header::COOKIE, cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"admin");
    }

    #[tokio::test]
    async fn test_require_admin_uniform_401() {
        let state = state();

        for cookie in [None, Some("admin-token=garbage"), Some("other=1")] {
            let mut builder = Request::builder().uri("/secret");
            if let Some(cookie) = cookie {
                builder = builder.header(header::COOKIE, cookie);
            }
            let response = admin_app(state.clone())
                .oneshot(builder.body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

            let body = body_json(response).await;
            assert_eq!(body["detail"], "Authentication required");
        }
    }
}
