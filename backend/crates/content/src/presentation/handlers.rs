//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use std::sync::Arc;

use crate::application::config::ContentConfig;
use crate::application::{GetPostUseCase, GetRelatedPostsUseCase, ListPostsUseCase};
use crate::domain::repository::ContentRepository;
use crate::error::ContentResult;
use crate::presentation::dto::{
    ListPostsQuery, PostDetailResponse, PostListResponse, PostResponse, RelatedPostsResponse,
};

/// Shared state for content handlers
#[derive(Clone)]
pub struct ContentAppState<R>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<ContentConfig>,
}

/// GET /api/posts
pub async fn list_posts<R>(
    State(state): State<ContentAppState<R>>,
    Query(query): Query<ListPostsQuery>,
) -> ContentResult<Json<PostListResponse>>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListPostsUseCase::new(state.repo.clone());
    let posts = use_case.execute(query.category.as_deref()).await?;

    let posts: Vec<PostResponse> = posts.into_iter().map(PostResponse::from).collect();

    Ok(Json(PostListResponse {
        total: posts.len(),
        posts,
    }))
}

/// GET /api/posts/{slug}
pub async fn get_post<R>(
    State(state): State<ContentAppState<R>>,
    Path(slug): Path<String>,
) -> ContentResult<Json<PostDetailResponse>>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetPostUseCase::new(state.repo.clone());
    let output = use_case.execute(&slug, state.config.max_related).await?;

    Ok(Json(PostDetailResponse {
        post: output.post.into(),
        related: output.related.into_iter().map(Into::into).collect(),
    }))
}

/// GET /api/posts/{slug}/related
pub async fn related_posts<R>(
    State(state): State<ContentAppState<R>>,
    Path(slug): Path<String>,
) -> ContentResult<Json<RelatedPostsResponse>>
where
    R: ContentRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetRelatedPostsUseCase::new(state.repo.clone());
    let related = use_case.execute(&slug, state.config.max_related).await?;

    Ok(Json(RelatedPostsResponse {
        related: related.into_iter().map(Into::into).collect(),
    }))
}
