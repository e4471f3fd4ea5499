use serde::{Deserialize, Serialize};
use crate::models::domain::{MatchBreakdown, MatchQuality, SponsorMatch};

/// Response for the score endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreMatchResponse {
    pub score: u8,
    pub breakdown: MatchBreakdown,
    pub quality: MatchQuality,
}

/// Response for the sponsor ranking endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterSponsorsResponse {
    pub matches: Vec<SponsorMatch>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response for the quality label endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityResponse {
    pub score: u8,
    pub quality: MatchQuality,
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
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
