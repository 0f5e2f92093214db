//! In-Memory Repository Implementations
//!
//! Process-local stand-in for the PostgreSQL repository.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use kernel::id::{CommentId, SubscriberId};

use crate::domain::entities::{Comment, PostAnalytics, Subscriber};
use crate::domain::repository::{AnalyticsRepository, CommentRepository, SubscriberRepository};
use crate::domain::value_objects::{Email, PostSlug};
use crate::error::{EngagementError, EngagementResult};

#[derive(Debug, Default)]
struct State {
    subscribers: Vec<Subscriber>,
    analytics: HashMap<String, PostAnalytics>,
    comments: Vec<Comment>,
}

/// In-memory engagement repository
#[derive(Debug, Clone, Default)]
pub struct InMemoryEngagementRepository {
    state: Arc<Mutex<State>>,
}

impl InMemoryEngagementRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SubscriberRepository for InMemoryEngagementRepository {
    async fn create(&self, subscriber: &Subscriber) -> EngagementResult<()> {
        let mut state = self.state();
        if state.subscribers.iter().any(|s| s.email == subscriber.email) {
            return Err(EngagementError::AlreadySubscribed);
        }
        state.subscribers.push(subscriber.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> EngagementResult<Option<Subscriber>> {
        Ok(self
            .state()
            .subscribers
            .iter()
            .find(|s| &s.email == email)
            .cloned())
    }

    async fn deactivate(&self, email: &Email) -> EngagementResult<bool> {
        let mut state = self.state();
        match state
            .subscribers
            .iter_mut()
            .find(|s| &s.email == email && s.active)
        {
            Some(subscriber) => {
                subscriber.active = false;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list(&self) -> EngagementResult<Vec<Subscriber>> {
        let mut subscribers = self.state().subscribers.clone();
        subscribers.sort_by(|a, b| b.subscribed_at.cmp(&a.subscribed_at));
        Ok(subscribers)
    }

    async fn delete(&self, id: SubscriberId) -> EngagementResult<bool> {
        let mut state = self.state();
        let before = state.subscribers.len();
        state.subscribers.retain(|s| s.id != id);
        Ok(state.subscribers.len() != before)
    }
}

impl AnalyticsRepository for InMemoryEngagementRepository {
    async fn find_by_slug(&self, slug: &PostSlug) -> EngagementResult<Option<PostAnalytics>> {
        Ok(self.state().analytics.get(slug.as_str()).cloned())
    }

    async fn increment_views(&self, slug: &PostSlug) -> EngagementResult<PostAnalytics> {
        let now = Utc::now();
        let mut state = self.state();
        let stats = state
            .analytics
            .entry(slug.as_str().to_string())
            .or_insert_with(|| PostAnalytics::new(slug.clone(), now));
        stats.record_view(now);
        Ok(stats.clone())
    }

    async fn adjust_likes(&self, slug: &PostSlug, increment: bool) -> EngagementResult<PostAnalytics> {
        let now = Utc::now();
        let mut state = self.state();
        let stats = state
            .analytics
            .entry(slug.as_str().to_string())
            .or_insert_with(|| PostAnalytics::new(slug.clone(), now));
        stats.apply_like(increment, now);
        Ok(stats.clone())
    }

    async fn list_by_views(&self) -> EngagementResult<Vec<PostAnalytics>> {
        let mut all: Vec<PostAnalytics> = self.state().analytics.values().cloned().collect();
        all.sort_by(|a, b| {
            b.views
                .cmp(&a.views)
                .then_with(|| a.slug.as_str().cmp(b.slug.as_str()))
        });
        Ok(all)
    }
}

impl CommentRepository for InMemoryEngagementRepository {
    async fn create_comment(&self, comment: &Comment) -> EngagementResult<()> {
        self.state().comments.push(comment.clone());
        Ok(())
    }

    async fn list_for_post(&self, slug: &PostSlug) -> EngagementResult<Vec<Comment>> {
        let mut comments: Vec<Comment> = self
            .state()
            .comments
            .iter()
            .rev()
            .filter(|c| &c.post_slug == slug)
            .cloned()
            .collect();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(comments)
    }

    async fn list_all(&self) -> EngagementResult<Vec<Comment>> {
        // Reversed first so equal timestamps keep the later insert on top
        let mut comments: Vec<Comment> = self.state().comments.iter().rev().cloned().collect();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(comments)
    }

    async fn delete_comment(&self, id: CommentId) -> EngagementResult<bool> {
        let mut state = self.state();
        let before = state.comments.len();
        state.comments.retain(|c| c.id != id);
        Ok(state.comments.len() != before)
    }
}
