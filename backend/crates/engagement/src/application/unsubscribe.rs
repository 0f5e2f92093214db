//! Unsubscribe Use Case

use std::sync::Arc;

use crate::domain::repository::SubscriberRepository;
use crate::domain::value_objects::Email;
use crate::error::{EngagementError, EngagementResult};

/// Result of an unsubscribe request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsubscribeOutcome {
    Unsubscribed,
    AlreadyInactive,
}

impl UnsubscribeOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            UnsubscribeOutcome::Unsubscribed => "구독이 취소되었습니다.",
            UnsubscribeOutcome::AlreadyInactive => "이미 구독이 취소된 이메일입니다.",
        }
    }
}

/// Unsubscribe use case
pub struct UnsubscribeUseCase<R>
where
    R: SubscriberRepository,
{
    repo: Arc<R>,
}

impl<R> UnsubscribeUseCase<R>
where
    R: SubscriberRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, email: &str) -> EngagementResult<UnsubscribeOutcome> {
        let email = Email::new(email)?;

        let subscriber = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(EngagementError::SubscriberNotFound)?;

        if !subscriber.active {
            return Ok(UnsubscribeOutcome::AlreadyInactive);
        }

        self.repo.deactivate(&email).await?;

        tracing::info!(subscriber_id = %subscriber.id, "Newsletter subscriber unsubscribed");

        Ok(UnsubscribeOutcome::Unsubscribed)
    }
}
