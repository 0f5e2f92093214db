//! Domain Entities

use chrono::{DateTime, Utc};
use kernel::id::{CommentId, PostAnalyticsId, SubscriberId};

use crate::domain::value_objects::{AuthorName, CommentContent, Email, PostSlug};

/// Newsletter subscriber
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscriber {
    pub id: SubscriberId,
    pub email: Email,
    pub subscribed_at: DateTime<Utc>,
    pub active: bool,
    pub daily_newsletter: bool,
    pub weekly_newsletter: bool,
}

impl Subscriber {
    /// Fresh, active subscriber receiving both newsletters
    pub fn new(email: Email, now: DateTime<Utc>) -> Self {
        Self {
            id: SubscriberId::new(),
            email,
            subscribed_at: now,
            active: true,
            daily_newsletter: true,
            weekly_newsletter: true,
        }
    }
}

/// View and like counters for one post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostAnalytics {
    pub id: PostAnalyticsId,
    pub slug: PostSlug,
    pub views: i32,
    /// Never negative
    pub likes: i32,
    pub updated_at: DateTime<Utc>,
}

impl PostAnalytics {
    pub fn new(slug: PostSlug, now: DateTime<Utc>) -> Self {
        Self {
            id: PostAnalyticsId::new(),
            slug,
            views: 0,
            likes: 0,
            updated_at: now,
        }
    }

    pub fn record_view(&mut self, now: DateTime<Utc>) {
        self.views = self.views.saturating_add(1);
        self.updated_at = now;
    }

    /// +1 or -1, floored at zero
    pub fn apply_like(&mut self, increment: bool, now: DateTime<Utc>) {
        self.likes = if increment {
            self.likes.saturating_add(1)
        } else {
            (self.likes - 1).max(0)
        };
        self.updated_at = now;
    }
}

/// Reader comment on a post
///
/// Comments are published immediately; moderation means deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub post_slug: PostSlug,
    pub author_name: AuthorName,
    pub content: CommentContent,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(
        post_slug: PostSlug,
        author_name: AuthorName,
        content: CommentContent,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: CommentId::new(),
            post_slug,
            author_name,
            content,
            created_at: now,
        }
    }
}
