//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{CommentId, SubscriberId};

use crate::domain::entities::{Comment, PostAnalytics, Subscriber};
use crate::domain::value_objects::{Email, PostSlug};
use crate::error::EngagementResult;

/// Subscriber repository trait
#[trait_variant::make(SubscriberRepository: Send)]
pub trait LocalSubscriberRepository {
    /// Insert a new subscriber; a taken e-mail yields `AlreadySubscribed`
    async fn create(&self, subscriber: &Subscriber) -> EngagementResult<()>;

    /// Find subscriber by e-mail, active or not
    async fn find_by_email(&self, email: &Email) -> EngagementResult<Option<Subscriber>>;

    /// Mark inactive; returns whether a row changed
    async fn deactivate(&self, email: &Email) -> EngagementResult<bool>;

    /// All subscribers, newest first
    async fn list(&self) -> EngagementResult<Vec<Subscriber>>;

    /// Delete by ID; returns whether a row existed
    async fn delete(&self, id: SubscriberId) -> EngagementResult<bool>;
}

/// Post analytics repository trait
#[trait_variant::make(AnalyticsRepository: Send)]
pub trait LocalAnalyticsRepository {
    /// Counters for a post, if any were ever recorded
    async fn find_by_slug(&self, slug: &PostSlug) -> EngagementResult<Option<PostAnalytics>>;

    /// Add one view, creating the record if needed
    async fn increment_views(&self, slug: &PostSlug) -> EngagementResult<PostAnalytics>;

    /// Add or remove one like (floored at zero), creating the record if needed
    async fn adjust_likes(&self, slug: &PostSlug, increment: bool) -> EngagementResult<PostAnalytics>;

    /// All records, most viewed first
    async fn list_by_views(&self) -> EngagementResult<Vec<PostAnalytics>>;
}

/// Comment repository trait
#[trait_variant::make(CommentRepository: Send)]
pub trait LocalCommentRepository {
    async fn create_comment(&self, comment: &Comment) -> EngagementResult<()>;

    /// Comments on one post, newest first
    async fn list_for_post(&self, slug: &PostSlug) -> EngagementResult<Vec<Comment>>;

    /// Every comment, newest first
    async fn list_all(&self) -> EngagementResult<Vec<Comment>>;

    /// Delete by ID; returns whether a row existed
    async fn delete_comment(&self, id: CommentId) -> EngagementResult<bool>;
}

/// Everything the engagement handlers need from one backing store
pub trait EngagementRepository:
    SubscriberRepository + AnalyticsRepository + CommentRepository + Clone + Send + Sync + 'static
{
}

impl<T> EngagementRepository for T where
    T: SubscriberRepository + AnalyticsRepository + CommentRepository + Clone + Send + Sync + 'static
{
}
