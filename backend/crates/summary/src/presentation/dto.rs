//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

/// POST /api/ai/summary request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    pub title: String,
    pub content: String,
}

/// POST /api/ai/summary response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub success: bool,
    pub summary: String,
    pub tokens_used: u32,
}
