//! Sponsor Match - compatibility scoring between events and sponsors
//!
//! The core is a pure, deterministic scorer combining four weighted factors
//! (category, budget, audience size, location) into a 0-100 match score,
//! plus helpers to label scores and rank sponsor lists. The `routes` module
//! exposes the same operations over HTTP.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{calculate_match_score, filter_sponsors_by_match_score, get_match_quality, Matcher};
pub use crate::models::{Category, Event, MatchBreakdown, MatchQuality, MatchResult, ScoringWeights, Sponsor, SponsorMatch};
