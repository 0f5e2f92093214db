//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::{DashboardStats, PostStatsOutput, TitledAnalytics, TitledComment};
use crate::domain::entities::{Comment, PostAnalytics, Subscriber};

/// Subscribe / unsubscribe request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailRequest {
    pub email: String,
}

/// Like toggle request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeRequest {
    pub increment: bool,
}

/// Success with a user-facing message
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub success: bool,
    pub message: &'static str,
}

impl MessageResponse {
    pub fn ok(message: &'static str) -> Self {
        Self {
            success: true,
            message,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessResponse {
    pub success: bool,
}

/// GET /api/analytics/view/{slug} response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostStatsResponse {
    pub views: i32,
    pub likes: i32,
}

impl From<PostStatsOutput> for PostStatsResponse {
    fn from(stats: PostStatsOutput) -> Self {
        Self {
            views: stats.views,
            likes: stats.likes,
        }
    }
}

/// Counter update response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsUpdateResponse {
    pub success: bool,
    pub views: i32,
    pub likes: i32,
}

impl From<PostStatsOutput> for StatsUpdateResponse {
    fn from(stats: PostStatsOutput) -> Self {
        Self {
            success: true,
            views: stats.views,
            likes: stats.likes,
        }
    }
}

/// Subscriber as shown in the admin console
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriberResponse {
    pub id: Uuid,
    pub email: String,
    pub subscribed_at: DateTime<Utc>,
    pub active: bool,
    pub daily_newsletter: bool,
    pub weekly_newsletter: bool,
}

impl From<Subscriber> for SubscriberResponse {
    fn from(s: Subscriber) -> Self {
        Self {
            id: *s.id.as_uuid(),
            email: s.email.as_str().to_string(),
            subscribed_at: s.subscribed_at,
            active: s.active,
            daily_newsletter: s.daily_newsletter,
            weekly_newsletter: s.weekly_newsletter,
        }
    }
}

/// GET /api/admin/subscribers response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriberListResponse {
    pub subscribers: Vec<SubscriberResponse>,
    pub total: usize,
    pub active: usize,
}

/// Per-post counters in the admin console
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostAnalyticsResponse {
    pub slug: String,
    pub views: i32,
    pub likes: i32,
    pub updated_at: DateTime<Utc>,
}

impl From<PostAnalytics> for PostAnalyticsResponse {
    fn from(a: PostAnalytics) -> Self {
        Self {
            slug: a.slug.as_str().to_string(),
            views: a.views,
            likes: a.likes,
            updated_at: a.updated_at,
        }
    }
}

/// GET /api/admin/analytics response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsListResponse {
    pub posts: Vec<PostAnalyticsResponse>,
    pub total_views: i64,
    pub total_likes: i64,
}

/// GET /api/comments query
#[derive(Debug, Clone, Deserialize)]
pub struct CommentsQuery {
    pub slug: Option<String>,
}

/// POST /api/comments request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub post_slug: String,
    pub author_name: String,
    pub content: String,
}

/// Comment as shown to readers
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: Uuid,
    pub post_slug: String,
    pub author_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(c: Comment) -> Self {
        Self {
            id: *c.id.as_uuid(),
            post_slug: c.post_slug.as_str().to_string(),
            author_name: c.author_name.as_str().to_string(),
            content: c.content.as_str().to_string(),
            created_at: c.created_at,
        }
    }
}

/// GET /api/comments response
#[derive(Debug, Clone, Serialize)]
pub struct CommentListResponse {
    pub comments: Vec<CommentResponse>,
}

/// POST /api/comments response
#[derive(Debug, Clone, Serialize)]
pub struct CreateCommentResponse {
    pub success: bool,
    pub comment: CommentResponse,
}

/// Comment in the admin console, with its post title
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCommentResponse {
    #[serde(flatten)]
    pub comment: CommentResponse,
    /// Falls back to the slug for posts missing from the index
    pub post_title: String,
}

impl From<TitledComment> for AdminCommentResponse {
    fn from(c: TitledComment) -> Self {
        Self {
            comment: c.comment.into(),
            post_title: c.post_title,
        }
    }
}

/// GET /api/admin/comments response
#[derive(Debug, Clone, Serialize)]
pub struct AdminCommentListResponse {
    pub comments: Vec<AdminCommentResponse>,
    pub total: usize,
}

/// Dashboard entry for a popular post
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopPostResponse {
    pub slug: String,
    pub title: String,
    pub views: i32,
    pub likes: i32,
}

impl From<TitledAnalytics> for TopPostResponse {
    fn from(t: TitledAnalytics) -> Self {
        Self {
            slug: t.analytics.slug.as_str().to_string(),
            title: t.title,
            views: t.analytics.views,
            likes: t.analytics.likes,
        }
    }
}

/// GET /api/admin/stats response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub total_views: i64,
    pub total_posts: usize,
    pub total_comments: usize,
    pub total_subscribers: usize,
    pub top_posts: Vec<TopPostResponse>,
    pub recent_comments: Vec<AdminCommentResponse>,
}

impl From<DashboardStats> for DashboardResponse {
    fn from(stats: DashboardStats) -> Self {
        Self {
            total_views: stats.total_views,
            total_posts: stats.total_posts,
            total_comments: stats.total_comments,
            total_subscribers: stats.total_subscribers,
            top_posts: stats.top_posts.into_iter().map(TopPostResponse::from).collect(),
            recent_comments: stats
                .recent_comments
                .into_iter()
                .map(AdminCommentResponse::from)
                .collect(),
        }
    }
}
