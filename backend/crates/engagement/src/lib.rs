//! Engagement Backend Module
//!
//! Newsletter subscriptions, per-post view/like counters, reader comments
//! and the admin dashboard built on them.
//!
//! Clean Architecture structure:
//! - `domain/` - Subscriber, analytics and comment entities, value objects, repository traits
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, public and admin routers
//!
//! ## Abuse Model
//! - Sign-up is rate limited per client address (5/hour)
//! - Comments are published unmoderated; the admin deletes them afterwards
//! - Admin routes carry no auth of their own; mount them behind
//!   `auth::require_admin`

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::EngagementConfig;
pub use error::{EngagementError, EngagementResult};
pub use infra::memory::InMemoryEngagementRepository;
pub use infra::postgres::PgEngagementRepository;
pub use domain::repository::EngagementRepository;
pub use presentation::handlers::{AdminAppState, EngagementAppState};
pub use presentation::router::{admin_router, analytics_router, comments_router, newsletter_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
