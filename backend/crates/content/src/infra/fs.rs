//! Filesystem Post Index
//!
//! Reads `<content_dir>/posts.json`, an array of post front-matter records,
//! once at startup.

use std::path::{Path, PathBuf};

use crate::domain::entities::{Category, Post};
use crate::domain::repository::ContentRepository;
use crate::error::ContentResult;
use crate::infra::memory::InMemoryContentRepository;

/// File name of the post index inside the content directory
pub const POST_INDEX_FILE: &str = "posts.json";

/// Post index loaded from the content directory
#[derive(Debug, Clone)]
pub struct FsContentRepository {
    path: PathBuf,
    index: InMemoryContentRepository,
}

impl FsContentRepository {
    /// Load the index from `content_dir`
    ///
    /// A missing index file yields an empty store. Malformed records,
    /// unknown categories and duplicate slugs fail the load.
    pub async fn load(content_dir: impl AsRef<Path>) -> ContentResult<Self> {
        let path = content_dir.as_ref().join(POST_INDEX_FILE);

        let index = match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let posts: Vec<Post> = serde_json::from_slice(&bytes)?;
                InMemoryContentRepository::new(posts)?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "Post index not found, serving no posts");
                InMemoryContentRepository::empty()
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!(path = %path.display(), posts = index.len(), "Loaded post index");

        Ok(Self { path, index })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl ContentRepository for FsContentRepository {
    async fn list(&self, category: Option<Category>) -> ContentResult<Vec<Post>> {
        self.index.list(category).await
    }

    async fn find_by_slug(&self, slug: &str) -> ContentResult<Option<Post>> {
        self.index.find_by_slug(slug).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContentError;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("content-fs-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn test_load_index() {
        let dir = scratch_dir("load");
        std::fs::write(
            dir.join(POST_INDEX_FILE),
            r#"[
                {"slug":"older","title":"Older","date":"2024-01-01","category":"tech","tags":["rust"]},
                {"slug":"newer","title":"Newer","date":"2024-02-01","category":"ai-news","aiGenerated":true}
            ]"#,
        )
        .unwrap();

        let repo = FsContentRepository::load(&dir).await.unwrap();
        assert_eq!(repo.len(), 2);

        let posts = repo.list(None).await.unwrap();
        assert_eq!(posts[0].slug, "newer");
        assert!(posts[0].ai_generated);
        assert_eq!(posts[1].tags, vec!["rust"]);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn test_missing_index_is_empty() {
        let dir = scratch_dir("missing");
        let repo = FsContentRepository::load(&dir).await.unwrap();
        assert!(repo.is_empty());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn test_unknown_category_rejected() {
        let dir = scratch_dir("badcat");
        std::fs::write(
            dir.join(POST_INDEX_FILE),
            r#"[{"slug":"a","title":"A","date":"2024-01-01","category":"gossip"}]"#,
        )
        .unwrap();

        let result = FsContentRepository::load(&dir).await;
        assert!(matches!(result, Err(ContentError::Parse(_))));
        std::fs::remove_dir_all(&dir).ok();
    }
}
