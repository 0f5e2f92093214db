//! Engagement Routers

use axum::{
    Router,
    routing::{delete, get, post},
};
use content::domain::repository::ContentRepository;
use platform::rate_limit::RateLimitStore;

use crate::domain::repository::EngagementRepository;
use crate::presentation::handlers::{self, AdminAppState, EngagementAppState};

/// Routes mounted under `/api/newsletter`
pub fn newsletter_router<R, S>(state: EngagementAppState<R, S>) -> Router
where
    R: EngagementRepository,
    S: RateLimitStore + 'static,
{
    Router::new()
        .route("/subscribe", post(handlers::subscribe::<R, S>))
        .route("/unsubscribe", post(handlers::unsubscribe::<R, S>))
        .with_state(state)
}

/// Routes mounted under `/api/analytics`
pub fn analytics_router<R, S>(state: EngagementAppState<R, S>) -> Router
where
    R: EngagementRepository,
    S: RateLimitStore + 'static,
{
    Router::new()
        .route(
            "/view/{slug}",
            get(handlers::get_post_stats::<R, S>).post(handlers::record_view::<R, S>),
        )
        .route("/like/{slug}", post(handlers::toggle_like::<R, S>))
        .with_state(state)
}

/// Routes mounted under `/api/comments`
pub fn comments_router<R, S>(state: EngagementAppState<R, S>) -> Router
where
    R: EngagementRepository,
    S: RateLimitStore + 'static,
{
    Router::new()
        .route(
            "/",
            get(handlers::list_comments::<R, S>).post(handlers::create_comment::<R, S>),
        )
        .with_state(state)
}

/// Admin routes mounted under `/api/admin`
///
/// Unauthenticated as returned; the caller layers `auth::require_admin`.
pub fn admin_router<R, P>(state: AdminAppState<R, P>) -> Router
where
    R: EngagementRepository,
    P: ContentRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/stats", get(handlers::dashboard_stats::<R, P>))
        .route("/subscribers", get(handlers::list_subscribers::<R, P>))
        .route("/subscribers/{id}", delete(handlers::delete_subscriber::<R, P>))
        .route("/analytics", get(handlers::list_post_analytics::<R, P>))
        .route("/comments", get(handlers::list_admin_comments::<R, P>))
        .route("/comments/{id}", delete(handlers::delete_comment::<R, P>))
        .with_state(state)
}
