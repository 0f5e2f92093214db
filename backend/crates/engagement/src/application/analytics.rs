//! Post Analytics Use Cases

use std::sync::Arc;

use crate::domain::entities::PostAnalytics;
use crate::domain::repository::AnalyticsRepository;
use crate::domain::value_objects::PostSlug;
use crate::error::EngagementResult;

/// View and like counts for one post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PostStatsOutput {
    pub views: i32,
    pub likes: i32,
}

impl From<&PostAnalytics> for PostStatsOutput {
    fn from(stats: &PostAnalytics) -> Self {
        Self {
            views: stats.views,
            likes: stats.likes,
        }
    }
}

/// Get post stats use case
pub struct GetPostStatsUseCase<R>
where
    R: AnalyticsRepository,
{
    repo: Arc<R>,
}

impl<R> GetPostStatsUseCase<R>
where
    R: AnalyticsRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Zeros for a post never viewed or liked
    pub async fn execute(&self, slug: &str) -> EngagementResult<PostStatsOutput> {
        let slug = PostSlug::new(slug)?;
        let stats = self.repo.find_by_slug(&slug).await?;

        Ok(stats.as_ref().map(PostStatsOutput::from).unwrap_or_default())
    }
}

/// Record view use case
pub struct RecordViewUseCase<R>
where
    R: AnalyticsRepository,
{
    repo: Arc<R>,
}

impl<R> RecordViewUseCase<R>
where
    R: AnalyticsRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, slug: &str) -> EngagementResult<PostStatsOutput> {
        let slug = PostSlug::new(slug)?;
        let stats = self.repo.increment_views(&slug).await?;

        tracing::debug!(slug = %slug, views = stats.views, "Recorded post view");

        Ok(PostStatsOutput::from(&stats))
    }
}

/// Toggle like use case
pub struct ToggleLikeUseCase<R>
where
    R: AnalyticsRepository,
{
    repo: Arc<R>,
}

impl<R> ToggleLikeUseCase<R>
where
    R: AnalyticsRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, slug: &str, increment: bool) -> EngagementResult<PostStatsOutput> {
        let slug = PostSlug::new(slug)?;
        let stats = self.repo.adjust_likes(&slug, increment).await?;

        tracing::debug!(slug = %slug, increment, likes = stats.likes, "Updated post likes");

        Ok(PostStatsOutput::from(&stats))
    }
}

/// List all post analytics use case (admin)
pub struct ListPostAnalyticsUseCase<R>
where
    R: AnalyticsRepository,
{
    repo: Arc<R>,
}

impl<R> ListPostAnalyticsUseCase<R>
where
    R: AnalyticsRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Most viewed first
    pub async fn execute(&self) -> EngagementResult<Vec<PostAnalytics>> {
        self.repo.list_by_views().await
    }
}
