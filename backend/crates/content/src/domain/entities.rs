//! Domain Entities

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ContentError;

/// Post category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Manual,
    Tech,
    Reading,
    AiDailyTip,
    AiGithub,
    AiNews,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Manual,
        Category::Tech,
        Category::Reading,
        Category::AiDailyTip,
        Category::AiGithub,
        Category::AiNews,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Category::Manual => "manual",
            Category::Tech => "tech",
            Category::Reading => "reading",
            Category::AiDailyTip => "ai-daily-tip",
            Category::AiGithub => "ai-github",
            Category::AiNews => "ai-news",
        }
    }

    /// Categories filled by the content generators
    pub fn is_ai(&self) -> bool {
        matches!(
            self,
            Category::AiDailyTip | Category::AiGithub | Category::AiNews
        )
    }
}

impl FromStr for Category {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.code() == s)
            .ok_or_else(|| ContentError::InvalidCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Post front-matter record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub date: NaiveDate,
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub ai_generated: bool,
}
