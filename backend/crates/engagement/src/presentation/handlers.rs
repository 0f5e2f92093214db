//! HTTP Handlers

use axum::Json;
use axum::extract::{ConnectInfo, Path, Query, State};
use axum::http::HeaderMap;
use content::domain::repository::ContentRepository;
use platform::client::extract_client_ip;
use platform::rate_limit::{InMemoryRateLimitStore, RateLimitStore, RateLimiter};
use std::net::SocketAddr;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::config::EngagementConfig;
use crate::application::{
    CreateCommentInput, CreateCommentUseCase, DashboardStatsUseCase, DeleteCommentUseCase,
    DeleteSubscriberUseCase, GetPostStatsUseCase, ListAdminCommentsUseCase, ListCommentsUseCase,
    ListPostAnalyticsUseCase, ListSubscribersUseCase, RecordViewUseCase, SubscribeUseCase,
    ToggleLikeUseCase, UnsubscribeUseCase,
};
use crate::domain::repository::EngagementRepository;
use crate::error::{EngagementError, EngagementResult};
use crate::presentation::dto::{
    AdminCommentListResponse, AdminCommentResponse, AnalyticsListResponse, CommentListResponse,
    CommentResponse, CommentsQuery, CreateCommentRequest, CreateCommentResponse,
    DashboardResponse, EmailRequest, LikeRequest, MessageResponse, PostAnalyticsResponse,
    PostStatsResponse, StatsUpdateResponse, SubscriberListResponse, SubscriberResponse,
    SuccessResponse,
};
use crate::presentation::extract::JsonBody;

const SUBSCRIBED_MESSAGE: &str = "구독이 완료되었습니다!";

/// Shared state for public engagement handlers
pub struct EngagementAppState<R, S = InMemoryRateLimitStore>
where
    R: EngagementRepository,
    S: RateLimitStore + 'static,
{
    pub repo: Arc<R>,
    pub limiter: Arc<RateLimiter<S>>,
    pub config: Arc<EngagementConfig>,
}

impl<R, S> Clone for EngagementAppState<R, S>
where
    R: EngagementRepository,
    S: RateLimitStore + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            limiter: self.limiter.clone(),
            config: self.config.clone(),
        }
    }
}

impl<R, S> EngagementAppState<R, S>
where
    R: EngagementRepository,
    S: RateLimitStore + 'static,
{
    pub fn new(repo: R, limiter: Arc<RateLimiter<S>>, config: EngagementConfig) -> Self {
        Self {
            repo: Arc::new(repo),
            limiter,
            config: Arc::new(config),
        }
    }
}

/// Shared state for admin handlers
///
/// Admin views label posts by title, so they also read the post index.
pub struct AdminAppState<R, P>
where
    R: EngagementRepository,
    P: ContentRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub posts: Arc<P>,
}

impl<R, P> Clone for AdminAppState<R, P>
where
    R: EngagementRepository,
    P: ContentRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            posts: self.posts.clone(),
        }
    }
}

impl<R, P> AdminAppState<R, P>
where
    R: EngagementRepository,
    P: ContentRepository + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>, posts: Arc<P>) -> Self {
        Self { repo, posts }
    }
}

// ============================================================================
// Newsletter
// ============================================================================

/// POST /api/newsletter/subscribe
///
/// The limiter runs before the body is inspected.
pub async fn subscribe<R, S>(
    State(state): State<EngagementAppState<R, S>>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    body: Result<JsonBody<EmailRequest>, EngagementError>,
) -> EngagementResult<Json<MessageResponse>>
where
    R: EngagementRepository,
    S: RateLimitStore + 'static,
{
    let client_ip = extract_client_ip(&headers, Some(addr.ip()));

    let use_case =
        SubscribeUseCase::new(state.repo.clone(), state.limiter.clone(), state.config.clone());
    use_case.admit(client_ip)?;
    let JsonBody(req) = body?;
    use_case.subscribe(&req.email).await?;

    Ok(Json(MessageResponse::ok(SUBSCRIBED_MESSAGE)))
}

/// POST /api/newsletter/unsubscribe
pub async fn unsubscribe<R, S>(
    State(state): State<EngagementAppState<R, S>>,
    JsonBody(req): JsonBody<EmailRequest>,
) -> EngagementResult<Json<MessageResponse>>
where
    R: EngagementRepository,
    S: RateLimitStore + 'static,
{
    let use_case = UnsubscribeUseCase::new(state.repo.clone());
    let outcome = use_case.execute(&req.email).await?;

    Ok(Json(MessageResponse::ok(outcome.message())))
}

// ============================================================================
// Analytics
// ============================================================================

/// GET /api/analytics/view/{slug}
pub async fn get_post_stats<R, S>(
    State(state): State<EngagementAppState<R, S>>,
    Path(slug): Path<String>,
) -> EngagementResult<Json<PostStatsResponse>>
where
    R: EngagementRepository,
    S: RateLimitStore + 'static,
{
    let stats = GetPostStatsUseCase::new(state.repo.clone())
        .execute(&slug)
        .await?;

    Ok(Json(stats.into()))
}

/// POST /api/analytics/view/{slug}
pub async fn record_view<R, S>(
    State(state): State<EngagementAppState<R, S>>,
    Path(slug): Path<String>,
) -> EngagementResult<Json<StatsUpdateResponse>>
where
    R: EngagementRepository,
    S: RateLimitStore + 'static,
{
    let stats = RecordViewUseCase::new(state.repo.clone())
        .execute(&slug)
        .await?;

    Ok(Json(stats.into()))
}

/// POST /api/analytics/like/{slug}
pub async fn toggle_like<R, S>(
    State(state): State<EngagementAppState<R, S>>,
    Path(slug): Path<String>,
    JsonBody(req): JsonBody<LikeRequest>,
) -> EngagementResult<Json<StatsUpdateResponse>>
where
    R: EngagementRepository,
    S: RateLimitStore + 'static,
{
    let stats = ToggleLikeUseCase::new(state.repo.clone())
        .execute(&slug, req.increment)
        .await?;

    Ok(Json(stats.into()))
}

// ============================================================================
// Comments
// ============================================================================

/// GET /api/comments?slug=
pub async fn list_comments<R, S>(
    State(state): State<EngagementAppState<R, S>>,
    Query(query): Query<CommentsQuery>,
) -> EngagementResult<Json<CommentListResponse>>
where
    R: EngagementRepository,
    S: RateLimitStore + 'static,
{
    let comments = ListCommentsUseCase::new(state.repo.clone())
        .execute(query.slug.as_deref())
        .await?;

    Ok(Json(CommentListResponse {
        comments: comments.into_iter().map(CommentResponse::from).collect(),
    }))
}

/// POST /api/comments
pub async fn create_comment<R, S>(
    State(state): State<EngagementAppState<R, S>>,
    JsonBody(req): JsonBody<CreateCommentRequest>,
) -> EngagementResult<Json<CreateCommentResponse>>
where
    R: EngagementRepository,
    S: RateLimitStore + 'static,
{
    let comment = CreateCommentUseCase::new(state.repo.clone())
        .execute(CreateCommentInput {
            post_slug: req.post_slug,
            author_name: req.author_name,
            content: req.content,
        })
        .await?;

    Ok(Json(CreateCommentResponse {
        success: true,
        comment: comment.into(),
    }))
}

// ============================================================================
// Admin
// ============================================================================

/// GET /api/admin/subscribers
pub async fn list_subscribers<R, P>(
    State(state): State<AdminAppState<R, P>>,
) -> EngagementResult<Json<SubscriberListResponse>>
where
    R: EngagementRepository,
    P: ContentRepository + Send + Sync + 'static,
{
    let output = ListSubscribersUseCase::new(state.repo.clone()).execute().await?;

    Ok(Json(SubscriberListResponse {
        total: output.subscribers.len(),
        active: output.active,
        subscribers: output
            .subscribers
            .into_iter()
            .map(SubscriberResponse::from)
            .collect(),
    }))
}

/// DELETE /api/admin/subscribers/{id}
pub async fn delete_subscriber<R, P>(
    State(state): State<AdminAppState<R, P>>,
    Path(id): Path<Uuid>,
) -> EngagementResult<Json<SuccessResponse>>
where
    R: EngagementRepository,
    P: ContentRepository + Send + Sync + 'static,
{
    DeleteSubscriberUseCase::new(state.repo.clone())
        .execute(id.into())
        .await?;

    Ok(Json(SuccessResponse { success: true }))
}

/// GET /api/admin/analytics
pub async fn list_post_analytics<R, P>(
    State(state): State<AdminAppState<R, P>>,
) -> EngagementResult<Json<AnalyticsListResponse>>
where
    R: EngagementRepository,
    P: ContentRepository + Send + Sync + 'static,
{
    let all = ListPostAnalyticsUseCase::new(state.repo.clone())
        .execute()
        .await?;

    let total_views = all.iter().map(|a| i64::from(a.views)).sum();
    let total_likes = all.iter().map(|a| i64::from(a.likes)).sum();

    Ok(Json(AnalyticsListResponse {
        posts: all.into_iter().map(PostAnalyticsResponse::from).collect(),
        total_views,
        total_likes,
    }))
}

/// GET /api/admin/comments
pub async fn list_admin_comments<R, P>(
    State(state): State<AdminAppState<R, P>>,
) -> EngagementResult<Json<AdminCommentListResponse>>
where
    R: EngagementRepository,
    P: ContentRepository + Send + Sync + 'static,
{
    let comments = ListAdminCommentsUseCase::new(state.repo.clone(), state.posts.clone())
        .execute()
        .await?;

    Ok(Json(AdminCommentListResponse {
        total: comments.len(),
        comments: comments.into_iter().map(AdminCommentResponse::from).collect(),
    }))
}

/// DELETE /api/admin/comments/{id}
pub async fn delete_comment<R, P>(
    State(state): State<AdminAppState<R, P>>,
    Path(id): Path<Uuid>,
) -> EngagementResult<Json<SuccessResponse>>
where
    R: EngagementRepository,
    P: ContentRepository + Send + Sync + 'static,
{
    DeleteCommentUseCase::new(state.repo.clone())
        .execute(id.into())
        .await?;

    Ok(Json(SuccessResponse { success: true }))
}

/// GET /api/admin/stats
pub async fn dashboard_stats<R, P>(
    State(state): State<AdminAppState<R, P>>,
) -> EngagementResult<Json<DashboardResponse>>
where
    R: EngagementRepository,
    P: ContentRepository + Send + Sync + 'static,
{
    let stats = DashboardStatsUseCase::new(state.repo.clone(), state.posts.clone())
        .execute()
        .await?;

    Ok(Json(stats.into()))
}
