//! PostgreSQL Repository Implementations
//!
//! Expects the `subscribers`, `post_analytics` and `comments` tables to
//! exist; the schema is managed outside this service.

use chrono::{DateTime, Utc};
use kernel::id::{CommentId, PostAnalyticsId, SubscriberId};
use sqlx::PgPool;

use crate::domain::entities::{Comment, PostAnalytics, Subscriber};
use crate::domain::repository::{AnalyticsRepository, CommentRepository, SubscriberRepository};
use crate::domain::value_objects::{AuthorName, CommentContent, Email, PostSlug};
use crate::error::{EngagementError, EngagementResult};

/// PostgreSQL unique_violation
const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL-backed engagement repository
#[derive(Clone)]
pub struct PgEngagementRepository {
    pool: PgPool,
}

impl PgEngagementRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Subscriber Repository Implementation
// ============================================================================

impl SubscriberRepository for PgEngagementRepository {
    async fn create(&self, subscriber: &Subscriber) -> EngagementResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO subscribers (
                id,
                email,
                subscribed_at,
                active,
                daily_newsletter,
                weekly_newsletter
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(subscriber.id)
        .bind(subscriber.email.as_str())
        .bind(subscriber.subscribed_at)
        .bind(subscriber.active)
        .bind(subscriber.daily_newsletter)
        .bind(subscriber.weekly_newsletter)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(e)) if e.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                Err(EngagementError::AlreadySubscribed)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_email(&self, email: &Email) -> EngagementResult<Option<Subscriber>> {
        let row = sqlx::query_as::<_, SubscriberRow>(
            r#"
            SELECT
                id,
                email,
                subscribed_at,
                active,
                daily_newsletter,
                weekly_newsletter
            FROM subscribers
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(SubscriberRow::into_subscriber))
    }

    async fn deactivate(&self, email: &Email) -> EngagementResult<bool> {
        let updated = sqlx::query("UPDATE subscribers SET active = FALSE WHERE email = $1 AND active")
            .bind(email.as_str())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(updated > 0)
    }

    async fn list(&self) -> EngagementResult<Vec<Subscriber>> {
        let rows = sqlx::query_as::<_, SubscriberRow>(
            r#"
            SELECT
                id,
                email,
                subscribed_at,
                active,
                daily_newsletter,
                weekly_newsletter
            FROM subscribers
            ORDER BY subscribed_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(SubscriberRow::into_subscriber).collect())
    }

    async fn delete(&self, id: SubscriberId) -> EngagementResult<bool> {
        let deleted = sqlx::query("DELETE FROM subscribers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Analytics Repository Implementation
// ============================================================================

impl AnalyticsRepository for PgEngagementRepository {
    async fn find_by_slug(&self, slug: &PostSlug) -> EngagementResult<Option<PostAnalytics>> {
        let row = sqlx::query_as::<_, PostAnalyticsRow>(
            r#"
            SELECT id, slug, views, likes, updated_at
            FROM post_analytics
            WHERE slug = $1
            "#,
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostAnalyticsRow::into_analytics))
    }

    async fn increment_views(&self, slug: &PostSlug) -> EngagementResult<PostAnalytics> {
        let row = sqlx::query_as::<_, PostAnalyticsRow>(
            r#"
            INSERT INTO post_analytics (id, slug, views, likes, updated_at)
            VALUES ($1, $2, 1, 0, $3)
            ON CONFLICT (slug) DO UPDATE
            SET views = post_analytics.views + 1,
                updated_at = EXCLUDED.updated_at
            RETURNING id, slug, views, likes, updated_at
            "#,
        )
        .bind(PostAnalyticsId::new())
        .bind(slug.as_str())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_analytics())
    }

    async fn adjust_likes(&self, slug: &PostSlug, increment: bool) -> EngagementResult<PostAnalytics> {
        let delta: i32 = if increment { 1 } else { -1 };

        let row = sqlx::query_as::<_, PostAnalyticsRow>(
            r#"
            INSERT INTO post_analytics (id, slug, views, likes, updated_at)
            VALUES ($1, $2, 0, GREATEST($3, 0), $4)
            ON CONFLICT (slug) DO UPDATE
            SET likes = GREATEST(post_analytics.likes + $3, 0),
                updated_at = EXCLUDED.updated_at
            RETURNING id, slug, views, likes, updated_at
            "#,
        )
        .bind(PostAnalyticsId::new())
        .bind(slug.as_str())
        .bind(delta)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_analytics())
    }

    async fn list_by_views(&self) -> EngagementResult<Vec<PostAnalytics>> {
        let rows = sqlx::query_as::<_, PostAnalyticsRow>(
            r#"
            SELECT id, slug, views, likes, updated_at
            FROM post_analytics
            ORDER BY views DESC, slug ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PostAnalyticsRow::into_analytics).collect())
    }
}

// ============================================================================
// Comment Repository Implementation
// ============================================================================

impl CommentRepository for PgEngagementRepository {
    async fn create_comment(&self, comment: &Comment) -> EngagementResult<()> {
        sqlx::query(
            r#"
            INSERT INTO comments (id, post_slug, author_name, content, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(comment.id)
        .bind(comment.post_slug.as_str())
        .bind(comment.author_name.as_str())
        .bind(comment.content.as_str())
        .bind(comment.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_for_post(&self, slug: &PostSlug) -> EngagementResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT id, post_slug, author_name, content, created_at
            FROM comments
            WHERE post_slug = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(slug.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CommentRow::into_comment).collect())
    }

    async fn list_all(&self) -> EngagementResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT id, post_slug, author_name, content, created_at
            FROM comments
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CommentRow::into_comment).collect())
    }

    async fn delete_comment(&self, id: CommentId) -> EngagementResult<bool> {
        let deleted = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct SubscriberRow {
    id: SubscriberId,
    email: String,
    subscribed_at: DateTime<Utc>,
    active: bool,
    daily_newsletter: bool,
    weekly_newsletter: bool,
}

impl SubscriberRow {
    fn into_subscriber(self) -> Subscriber {
        Subscriber {
            id: self.id,
            email: Email::from_db(self.email),
            subscribed_at: self.subscribed_at,
            active: self.active,
            daily_newsletter: self.daily_newsletter,
            weekly_newsletter: self.weekly_newsletter,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PostAnalyticsRow {
    id: PostAnalyticsId,
    slug: String,
    views: i32,
    likes: i32,
    updated_at: DateTime<Utc>,
}

impl PostAnalyticsRow {
    fn into_analytics(self) -> PostAnalytics {
        PostAnalytics {
            id: self.id,
            slug: PostSlug::from_db(self.slug),
            views: self.views,
            likes: self.likes,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    id: CommentId,
    post_slug: String,
    author_name: String,
    content: String,
    created_at: DateTime<Utc>,
}

impl CommentRow {
    fn into_comment(self) -> Comment {
        Comment {
            id: self.id,
            post_slug: PostSlug::from_db(self.post_slug),
            author_name: AuthorName::from_db(self.author_name),
            content: CommentContent::from_db(self.content),
            created_at: self.created_at,
        }
    }
}
