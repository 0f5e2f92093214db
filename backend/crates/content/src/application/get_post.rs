//! Get Post Use Case
//!
//! Post detail with its related posts.

use std::sync::Arc;

use crate::domain::entities::Post;
use crate::domain::repository::ContentRepository;
use crate::domain::services::select_related;
use crate::error::{ContentError, ContentResult};

/// Related post with its score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedPost {
    pub post: Post,
    pub score: u32,
}

/// Post detail output
#[derive(Debug, Clone)]
pub struct PostWithRelated {
    pub post: Post,
    pub related: Vec<RelatedPost>,
}

/// Related posts use case
pub struct GetRelatedPostsUseCase<R>
where
    R: ContentRepository,
{
    repo: Arc<R>,
}

impl<R> GetRelatedPostsUseCase<R>
where
    R: ContentRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, slug: &str, max_results: usize) -> ContentResult<Vec<RelatedPost>> {
        let current = self
            .repo
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| ContentError::PostNotFound(slug.to_string()))?;

        self.related_to(&current, max_results).await
    }

    /// Related posts for an already-loaded post
    pub async fn related_to(&self, current: &Post, max_results: usize) -> ContentResult<Vec<RelatedPost>> {
        let pool = self.repo.list(None).await?;

        let related: Vec<RelatedPost> = select_related(current, &pool, max_results)
            .into_iter()
            .map(|scored| RelatedPost {
                post: scored.post.clone(),
                score: scored.score,
            })
            .collect();

        tracing::debug!(slug = %current.slug, related = related.len(), "Selected related posts");

        Ok(related)
    }
}

/// Get post use case
pub struct GetPostUseCase<R>
where
    R: ContentRepository,
{
    repo: Arc<R>,
}

impl<R> GetPostUseCase<R>
where
    R: ContentRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, slug: &str, max_related: usize) -> ContentResult<PostWithRelated> {
        let post = self
            .repo
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| ContentError::PostNotFound(slug.to_string()))?;

        let related = GetRelatedPostsUseCase::new(self.repo.clone())
            .related_to(&post, max_related)
            .await?;

        Ok(PostWithRelated { post, related })
    }
}
