//! Router Assembly

use auth::{AuthAppState, auth_router, require_admin};
use axum::Router;
use axum::middleware::from_fn_with_state;
use content::application::config::ContentConfig;
use content::domain::repository::ContentRepository;
use content::content_router;
use engagement::{
    AdminAppState, EngagementAppState, EngagementRepository, admin_router, analytics_router,
    comments_router, newsletter_router,
};
use platform::rate_limit::{InMemoryRateLimitStore, RateLimitStore};
use std::sync::Arc;
use summary::{LlmClient, SummaryAppState, summary_router};

/// Everything the HTTP surface needs
///
/// `S` is the rate limit store shared by sign-up and summary limits.
pub struct AppComponents<P, E, C, S = InMemoryRateLimitStore>
where
    P: ContentRepository + Clone + Send + Sync + 'static,
    E: EngagementRepository,
    C: LlmClient + Send + Sync + 'static,
    S: RateLimitStore + 'static,
{
    pub auth: AuthAppState,
    pub content_repo: P,
    pub content_config: ContentConfig,
    pub engagement: EngagementAppState<E, S>,
    pub summary: SummaryAppState<C, S>,
}

/// All `/api` routes; admin routes sit behind the session gate
pub fn build_router<P, E, C, S>(components: AppComponents<P, E, C, S>) -> Router
where
    P: ContentRepository + Clone + Send + Sync + 'static,
    E: EngagementRepository,
    C: LlmClient + Send + Sync + 'static,
    S: RateLimitStore + 'static,
{
    let AppComponents {
        auth,
        content_repo,
        content_config,
        engagement,
        summary,
    } = components;

    let admin = admin_router(AdminAppState::new(
        engagement.repo.clone(),
        Arc::new(content_repo.clone()),
    ))
    .route_layer(from_fn_with_state(auth.clone(), require_admin));

    Router::new()
        .nest("/api/auth", auth_router(auth))
        .nest("/api/posts", content_router(content_repo, content_config))
        .nest("/api/newsletter", newsletter_router(engagement.clone()))
        .nest("/api/analytics", analytics_router(engagement.clone()))
        .nest("/api/comments", comments_router(engagement))
        .nest("/api/ai", summary_router(summary))
        .nest("/api/admin", admin)
}
