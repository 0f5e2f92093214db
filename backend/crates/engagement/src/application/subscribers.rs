//! Subscriber Administration Use Cases

use std::sync::Arc;

use kernel::id::SubscriberId;

use crate::domain::entities::Subscriber;
use crate::domain::repository::SubscriberRepository;
use crate::error::{EngagementError, EngagementResult};

/// Subscriber list output
#[derive(Debug, Clone)]
pub struct SubscriberListOutput {
    /// Newest first
    pub subscribers: Vec<Subscriber>,
    pub active: usize,
}

/// List subscribers use case
pub struct ListSubscribersUseCase<R>
where
    R: SubscriberRepository,
{
    repo: Arc<R>,
}

impl<R> ListSubscribersUseCase<R>
where
    R: SubscriberRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> EngagementResult<SubscriberListOutput> {
        let subscribers = self.repo.list().await?;
        let active = subscribers.iter().filter(|s| s.active).count();

        Ok(SubscriberListOutput {
            subscribers,
            active,
        })
    }
}

/// Delete subscriber use case
pub struct DeleteSubscriberUseCase<R>
where
    R: SubscriberRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteSubscriberUseCase<R>
where
    R: SubscriberRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: SubscriberId) -> EngagementResult<()> {
        if !self.repo.delete(id).await? {
            return Err(EngagementError::SubscriberNotFound);
        }

        tracing::info!(subscriber_id = %id, "Subscriber deleted by admin");

        Ok(())
    }
}
