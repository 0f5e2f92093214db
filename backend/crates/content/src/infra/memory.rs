//! In-Memory Post Store

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::entities::{Category, Post};
use crate::domain::repository::ContentRepository;
use crate::error::{ContentError, ContentResult};

/// Immutable post index held in memory, newest first
#[derive(Debug, Clone, Default)]
pub struct InMemoryContentRepository {
    posts: Arc<Vec<Post>>,
}

impl InMemoryContentRepository {
    /// Build the index; slugs must be unique
    pub fn new(mut posts: Vec<Post>) -> ContentResult<Self> {
        let mut seen = HashSet::with_capacity(posts.len());
        for post in &posts {
            if !seen.insert(post.slug.as_str()) {
                return Err(ContentError::DuplicateSlug(post.slug.clone()));
            }
        }

        posts.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(Self {
            posts: Arc::new(posts),
        })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

impl ContentRepository for InMemoryContentRepository {
    async fn list(&self, category: Option<Category>) -> ContentResult<Vec<Post>> {
        Ok(self
            .posts
            .iter()
            .filter(|post| category.is_none_or(|c| post.category == c))
            .cloned()
            .collect())
    }

    async fn find_by_slug(&self, slug: &str) -> ContentResult<Option<Post>> {
        Ok(self.posts.iter().find(|post| post.slug == slug).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn post(slug: &str, category: Category, day: u32) -> Post {
        Post {
            slug: slug.to_string(),
            title: slug.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
            category,
            tags: vec![],
            summary: None,
            ai_generated: false,
        }
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let repo = InMemoryContentRepository::new(vec![
            post("a", Category::Tech, 1),
            post("b", Category::Tech, 3),
            post("c", Category::Reading, 2),
        ])
        .unwrap();

        let slugs: Vec<String> = repo.list(None).await.unwrap().into_iter().map(|p| p.slug).collect();
        assert_eq!(slugs, vec!["b", "c", "a"]);
    }

    #[tokio::test]
    async fn test_list_by_category() {
        let repo = InMemoryContentRepository::new(vec![
            post("a", Category::Tech, 1),
            post("c", Category::Reading, 2),
        ])
        .unwrap();

        let posts = repo.list(Some(Category::Reading)).await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "c");
        assert!(repo.list(Some(Category::AiNews)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_slug() {
        let repo = InMemoryContentRepository::new(vec![post("a", Category::Tech, 1)]).unwrap();
        assert!(repo.find_by_slug("a").await.unwrap().is_some());
        assert!(repo.find_by_slug("missing").await.unwrap().is_none());
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let result = InMemoryContentRepository::new(vec![
            post("a", Category::Tech, 1),
            post("a", Category::Reading, 2),
        ]);
        assert!(matches!(result, Err(ContentError::DuplicateSlug(slug)) if slug == "a"));
    }
}
