use crate::models::domain::CoffeeBean;
use serde::{Deserialize, Serialize};

/// Response for the recommendations endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<ScoredBean>,
    #[serde(rename = "totalBeans")]
    pub total_beans: usize,
}

/// One recommended bean with its score and display percentage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredBean {
    pub bean: CoffeeBean,
    pub score: u32,
    #[serde(rename = "matchPercent")]
    pub match_percent: u8,
    #[serde(rename = "matchReasons")]
    pub match_reasons: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
