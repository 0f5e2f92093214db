//! Typed IDs
//!
//! UUID v4 keys tagged with the entity they identify, so a subscriber id
//! cannot be passed where an analytics row id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

/// Entity-tagged UUID
///
/// ```
/// use kernel::id::SubscriberId;
///
/// let id = SubscriberId::new();
/// assert_eq!(id.as_uuid().get_version_num(), 4);
/// ```
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id<T> {
    value: Uuid,
    #[serde(skip)]
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    pub fn new() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    pub const fn from_uuid(value: Uuid) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.value
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Manual impls: derives would demand the same traits of the marker type.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl<T> From<Uuid> for Id<T> {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

// Stored as a plain postgres `uuid` column.
#[cfg(feature = "sqlx")]
mod pg {
    use super::Id;
    use sqlx::encode::IsNull;
    use sqlx::error::BoxDynError;
    use sqlx::postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef, Postgres};
    use uuid::Uuid;

    impl<T> sqlx::Type<Postgres> for Id<T> {
        fn type_info() -> PgTypeInfo {
            <Uuid as sqlx::Type<Postgres>>::type_info()
        }
    }

    impl<T> sqlx::Encode<'_, Postgres> for Id<T> {
        fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
            <Uuid as sqlx::Encode<'_, Postgres>>::encode_by_ref(&self.value, buf)
        }
    }

    impl<'r, T> sqlx::Decode<'r, Postgres> for Id<T> {
        fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
            <Uuid as sqlx::Decode<'r, Postgres>>::decode(value).map(Id::from_uuid)
        }
    }
}

pub mod markers {
    /// Newsletter subscriber
    pub enum Subscriber {}

    /// Per-post view/like counters
    pub enum PostAnalytics {}

    /// Reader comment on a post
    pub enum Comment {}
}

pub type SubscriberId = Id<markers::Subscriber>;
pub type PostAnalyticsId = Id<markers::PostAnalytics>;
pub type CommentId = Id<markers::Comment>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_serializes_as_plain_uuid() {
        let id = SubscriberId::from_uuid(Uuid::nil());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", Uuid::nil()));

        let back: SubscriberId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_fresh_ids_differ() {
        let ids: HashSet<PostAnalyticsId> = (0..16).map(|_| PostAnalyticsId::new()).collect();
        assert_eq!(ids.len(), 16);
    }

    #[test]
    fn test_display_is_bare_uuid() {
        let uuid = Uuid::new_v4();
        assert_eq!(SubscriberId::from(uuid).to_string(), uuid.to_string());
    }
}
