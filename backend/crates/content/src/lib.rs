//! Content Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Post entity, related-content scoring, repository trait
//! - `application/` - Use cases
//! - `infra/` - Post index loaded from the content directory, in-memory store
//! - `presentation/` - HTTP handlers
//!
//! Posts are read-only here. Authoring happens outside this service.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use domain::entities::{Category, Post};
pub use domain::services::{DEFAULT_MAX_RELATED, ScoredPost, relevance_score, select_related};
pub use error::{ContentError, ContentResult};
pub use infra::fs::FsContentRepository;
pub use infra::memory::InMemoryContentRepository;
pub use presentation::router::content_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
