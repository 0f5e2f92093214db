//! Repository Traits
//!
//! Interfaces for reading the post index. Implementations are in the infra layer.

use crate::domain::entities::{Category, Post};
use crate::error::ContentResult;

/// Post repository trait
#[trait_variant::make(ContentRepository: Send)]
pub trait LocalContentRepository {
    /// All posts, newest first, optionally restricted to one category
    async fn list(&self, category: Option<Category>) -> ContentResult<Vec<Post>>;

    /// Find post by slug
    async fn find_by_slug(&self, slug: &str) -> ContentResult<Option<Post>>;
}
