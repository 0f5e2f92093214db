//! Comment Use Cases

use std::sync::Arc;

use chrono::Utc;
use kernel::id::CommentId;

use crate::domain::entities::Comment;
use crate::domain::repository::CommentRepository;
use crate::domain::value_objects::{AuthorName, CommentContent, PostSlug};
use crate::error::{EngagementError, EngagementResult};

/// Create comment input
pub struct CreateCommentInput {
    pub post_slug: String,
    pub author_name: String,
    pub content: String,
}

/// List comments for one post
pub struct ListCommentsUseCase<R>
where
    R: CommentRepository,
{
    repo: Arc<R>,
}

impl<R> ListCommentsUseCase<R>
where
    R: CommentRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Newest first; a missing or blank slug is a bad request
    pub async fn execute(&self, slug: Option<&str>) -> EngagementResult<Vec<Comment>> {
        let slug = slug
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| EngagementError::InvalidRequest("Missing slug parameter".to_string()))?;
        let slug = PostSlug::new(slug)?;

        self.repo.list_for_post(&slug).await
    }
}

/// Create comment use case
pub struct CreateCommentUseCase<R>
where
    R: CommentRepository,
{
    repo: Arc<R>,
}

impl<R> CreateCommentUseCase<R>
where
    R: CommentRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: CreateCommentInput) -> EngagementResult<Comment> {
        let comment = Comment::new(
            PostSlug::new(&input.post_slug)?,
            AuthorName::new(&input.author_name)?,
            CommentContent::new(&input.content)?,
            Utc::now(),
        );
        self.repo.create_comment(&comment).await?;

        tracing::info!(comment_id = %comment.id, slug = %comment.post_slug, "New comment");

        Ok(comment)
    }
}

/// Delete comment use case (admin)
pub struct DeleteCommentUseCase<R>
where
    R: CommentRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteCommentUseCase<R>
where
    R: CommentRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: CommentId) -> EngagementResult<()> {
        if !self.repo.delete_comment(id).await? {
            return Err(EngagementError::CommentNotFound);
        }

        tracing::info!(comment_id = %id, "Comment deleted by admin");

        Ok(())
    }
}
