use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{Event, Sponsor};

/// Request to score a single event/sponsor pair
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreMatchRequest {
    #[validate(nested)]
    pub event: Event,
    #[validate(nested)]
    pub sponsor: Sponsor,
}

/// Request to rank sponsors for an event
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FilterSponsorsRequest {
    #[validate(nested)]
    pub event: Event,
    #[validate(nested)]
    pub sponsors: Vec<Sponsor>,
    #[validate(range(max = 100))]
    #[serde(alias = "min_score", rename = "minScore")]
    pub min_score: Option<u8>,
    #[validate(range(min = 1))]
    pub limit: Option<u16>,
}

/// Query for the quality label endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QualityQuery {
    #[validate(range(max = 100))]
    pub score: u8,
}
