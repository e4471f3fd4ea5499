// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AudienceRange, BudgetRange, Category, Event, EventMatch, MatchBreakdown, MatchQuality,
    MatchResult, ScoringWeights, Sponsor, SponsorMatch, SponsorPreferences, UnknownCategory,
    WeightsError,
};
pub use requests::{FilterSponsorsRequest, QualityQuery, ScoreMatchRequest};
pub use responses::{ErrorResponse, FilterSponsorsResponse, HealthResponse, QualityResponse, ScoreMatchResponse};
