//! API DTOs (Data Transfer Objects)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::RelatedPost;
use crate::domain::entities::{Category, Post};

/// Query for GET /api/posts
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListPostsQuery {
    pub category: Option<String>,
}

/// Post list entry and detail body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub slug: String,
    pub title: String,
    pub date: NaiveDate,
    pub category: Category,
    pub tags: Vec<String>,
    pub summary: Option<String>,
    pub ai_generated: bool,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            slug: post.slug,
            title: post.title,
            date: post.date,
            category: post.category,
            tags: post.tags,
            summary: post.summary,
            ai_generated: post.ai_generated,
        }
    }
}

/// Related post entry
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedPostResponse {
    pub slug: String,
    pub title: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub date: NaiveDate,
}

impl From<RelatedPost> for RelatedPostResponse {
    fn from(related: RelatedPost) -> Self {
        let post = related.post;
        Self {
            slug: post.slug,
            title: post.title,
            category: post.category,
            tags: post.tags,
            date: post.date,
        }
    }
}

/// GET /api/posts response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostListResponse {
    pub posts: Vec<PostResponse>,
    pub total: usize,
}

/// GET /api/posts/{slug} response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetailResponse {
    pub post: PostResponse,
    pub related: Vec<RelatedPostResponse>,
}

/// GET /api/posts/{slug}/related response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedPostsResponse {
    pub related: Vec<RelatedPostResponse>,
}
