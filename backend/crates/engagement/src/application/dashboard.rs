//! Admin Dashboard Use Cases
//!
//! Views that join engagement records with post titles from the post index.
//! A record whose post is no longer indexed shows its slug as the title.

use std::collections::HashMap;
use std::sync::Arc;

use content::domain::repository::ContentRepository;

use crate::domain::entities::{Comment, PostAnalytics};
use crate::domain::repository::{AnalyticsRepository, CommentRepository, SubscriberRepository};
use crate::domain::value_objects::PostSlug;
use crate::error::EngagementResult;

/// Rows shown in each dashboard list
pub const DASHBOARD_LIST_LEN: usize = 5;

/// Slug to title lookup over the whole post index
pub struct PostTitles {
    titles: HashMap<String, String>,
}

impl PostTitles {
    pub async fn load<P>(posts: &P) -> EngagementResult<Self>
    where
        P: ContentRepository,
    {
        let titles = posts
            .list(None)
            .await?
            .into_iter()
            .map(|post| (post.slug, post.title))
            .collect();
        Ok(Self { titles })
    }

    /// Number of indexed posts
    pub fn post_count(&self) -> usize {
        self.titles.len()
    }

    pub fn title_for(&self, slug: &PostSlug) -> String {
        self.titles
            .get(slug.as_str())
            .cloned()
            .unwrap_or_else(|| slug.as_str().to_string())
    }
}

/// Comment with the title of the post it belongs to
#[derive(Debug, Clone)]
pub struct TitledComment {
    pub comment: Comment,
    pub post_title: String,
}

/// Post counters with the post title
#[derive(Debug, Clone)]
pub struct TitledAnalytics {
    pub analytics: PostAnalytics,
    pub title: String,
}

/// Dashboard summary
#[derive(Debug, Clone)]
pub struct DashboardStats {
    pub total_views: i64,
    pub total_posts: usize,
    pub total_comments: usize,
    /// Active subscribers only
    pub total_subscribers: usize,
    /// Most viewed first
    pub top_posts: Vec<TitledAnalytics>,
    /// Newest first
    pub recent_comments: Vec<TitledComment>,
}

/// List every comment with post titles (admin)
pub struct ListAdminCommentsUseCase<R, P>
where
    R: CommentRepository,
    P: ContentRepository,
{
    repo: Arc<R>,
    posts: Arc<P>,
}

impl<R, P> ListAdminCommentsUseCase<R, P>
where
    R: CommentRepository,
    P: ContentRepository + Sync,
{
    pub fn new(repo: Arc<R>, posts: Arc<P>) -> Self {
        Self { repo, posts }
    }

    /// Newest first
    pub async fn execute(&self) -> EngagementResult<Vec<TitledComment>> {
        let titles = PostTitles::load(self.posts.as_ref()).await?;
        let comments = self.repo.list_all().await?;

        Ok(comments
            .into_iter()
            .map(|comment| TitledComment {
                post_title: titles.title_for(&comment.post_slug),
                comment,
            })
            .collect())
    }
}

/// Dashboard statistics use case (admin)
pub struct DashboardStatsUseCase<R, P>
where
    R: SubscriberRepository + AnalyticsRepository + CommentRepository,
    P: ContentRepository,
{
    repo: Arc<R>,
    posts: Arc<P>,
}

impl<R, P> DashboardStatsUseCase<R, P>
where
    R: SubscriberRepository + AnalyticsRepository + CommentRepository + Sync,
    P: ContentRepository + Sync,
{
    pub fn new(repo: Arc<R>, posts: Arc<P>) -> Self {
        Self { repo, posts }
    }

    pub async fn execute(&self) -> EngagementResult<DashboardStats> {
        let titles = PostTitles::load(self.posts.as_ref()).await?;
        let analytics = self.repo.list_by_views().await?;
        let comments = self.repo.list_all().await?;
        let subscribers = self.repo.list().await?;

        let total_views = analytics.iter().map(|a| i64::from(a.views)).sum();
        let total_comments = comments.len();

        let top_posts = analytics
            .into_iter()
            .take(DASHBOARD_LIST_LEN)
            .map(|analytics| TitledAnalytics {
                title: titles.title_for(&analytics.slug),
                analytics,
            })
            .collect();

        let recent_comments = comments
            .into_iter()
            .take(DASHBOARD_LIST_LEN)
            .map(|comment| TitledComment {
                post_title: titles.title_for(&comment.post_slug),
                comment,
            })
            .collect();

        Ok(DashboardStats {
            total_views,
            total_posts: titles.post_count(),
            total_comments,
            total_subscribers: subscribers.iter().filter(|s| s.active).count(),
            top_posts,
            recent_comments,
        })
    }
}
