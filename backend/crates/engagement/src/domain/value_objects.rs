//! Value Objects

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{EngagementError, EngagementResult};

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

/// Subscriber e-mail address, trimmed and lowercased
///
/// Format check only. Deliverability is never verified.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn new(email: impl AsRef<str>) -> EngagementResult<Self> {
        let email = email.as_ref().trim().to_lowercase();

        if email.is_empty() || email.len() > EMAIL_MAX_LENGTH || !Self::is_valid_format(&email) {
            return Err(EngagementError::InvalidEmail);
        }

        Ok(Self(email))
    }

    fn is_valid_format(email: &str) -> bool {
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };

        if local.is_empty() || local.len() > 64 || local.chars().any(char::is_whitespace) {
            return false;
        }

        if domain.is_empty() || !domain.contains('.') || domain.contains('@') {
            return false;
        }

        if !domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        {
            return false;
        }

        if domain.starts_with(['.', '-']) || domain.ends_with(['.', '-']) || domain.contains("..") {
            return false;
        }

        true
    }

    /// Value read back from the database (already validated on insert)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Email {
    type Err = EngagementError;

    fn from_str(s: &str) -> EngagementResult<Self> {
        Email::new(s)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Post slug used as the analytics and comment key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostSlug(String);

impl PostSlug {
    const MAX_LENGTH: usize = 255;

    pub fn new(slug: impl AsRef<str>) -> EngagementResult<Self> {
        let slug = slug.as_ref().trim();

        let valid = !slug.is_empty()
            && slug.len() <= Self::MAX_LENGTH
            && slug
                .chars()
                .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '/' | '.'));

        if !valid {
            return Err(EngagementError::InvalidRequest(format!(
                "Invalid post slug: {}",
                slug
            )));
        }

        Ok(Self(slug.to_string()))
    }

    pub fn from_db(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trimmed, non-empty text of at most `max` characters
fn bounded_text(field: &str, value: &str, max: usize) -> EngagementResult<String> {
    let value = value.trim();
    let len = value.chars().count();

    if len == 0 || len > max {
        return Err(EngagementError::InvalidRequest(format!(
            "{field} must be 1-{max} characters"
        )));
    }

    Ok(value.to_string())
}

/// Display name a commenter chose; not tied to any account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorName(String);

impl AuthorName {
    pub const MAX_LENGTH: usize = 100;

    pub fn new(name: impl AsRef<str>) -> EngagementResult<Self> {
        bounded_text("authorName", name.as_ref(), Self::MAX_LENGTH).map(Self)
    }

    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Comment body, stored as plain text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentContent(String);

impl CommentContent {
    pub const MAX_LENGTH: usize = 5000;

    pub fn new(content: impl AsRef<str>) -> EngagementResult<Self> {
        bounded_text("content", content.as_ref(), Self::MAX_LENGTH).map(Self)
    }

    pub fn from_db(content: impl Into<String>) -> Self {
        Self(content.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
