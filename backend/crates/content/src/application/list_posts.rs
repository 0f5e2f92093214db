//! List Posts Use Case

use std::sync::Arc;

use crate::domain::entities::{Category, Post};
use crate::domain::repository::ContentRepository;
use crate::error::ContentResult;

/// List posts use case
pub struct ListPostsUseCase<R>
where
    R: ContentRepository,
{
    repo: Arc<R>,
}

impl<R> ListPostsUseCase<R>
where
    R: ContentRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// `category` is the raw query value; unknown values are rejected
    pub async fn execute(&self, category: Option<&str>) -> ContentResult<Vec<Post>> {
        let category = category
            .filter(|c| !c.is_empty())
            .map(str::parse::<Category>)
            .transpose()?;

        self.repo.list(category).await
    }
}
