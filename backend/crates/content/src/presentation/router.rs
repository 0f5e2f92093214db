//! Content Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::application::config::ContentConfig;
use crate::domain::repository::ContentRepository;
use crate::presentation::handlers::{self, ContentAppState};

/// Routes mounted under `/api/posts`
pub fn content_router<R>(repo: R, config: ContentConfig) -> Router
where
    R: ContentRepository + Clone + Send + Sync + 'static,
{
    let state = ContentAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/", get(handlers::list_posts::<R>))
        .route("/{slug}", get(handlers::get_post::<R>))
        .route("/{slug}/related", get(handlers::related_posts::<R>))
        .with_state(state)
}
