//! Application Layer - Use Cases

pub mod config;
pub mod get_post;
pub mod list_posts;

pub use config::ContentConfig;
pub use get_post::{GetPostUseCase, GetRelatedPostsUseCase, PostWithRelated, RelatedPost};
pub use list_posts::ListPostsUseCase;
