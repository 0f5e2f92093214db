//! Application Configuration

use std::path::PathBuf;

use crate::domain::services::DEFAULT_MAX_RELATED;

/// Content application configuration
#[derive(Debug, Clone)]
pub struct ContentConfig {
    /// Directory holding `posts.json`
    pub content_dir: PathBuf,
    /// Related posts attached to a post detail
    pub max_related: usize,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            max_related: DEFAULT_MAX_RELATED,
        }
    }
}

impl ContentConfig {
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
            ..Default::default()
        }
    }
}
