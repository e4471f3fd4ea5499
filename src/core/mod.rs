// Core algorithm exports
pub mod budget;
pub mod category;
pub mod location;
pub mod matcher;
pub mod scoring;

pub use budget::{budget_score, estimate_event_budget};
pub use category::{category_score, cost_per_attendee, related_categories};
pub use location::location_score;
pub use matcher::{filter_sponsors_by_match_score, rank_events_for_sponsor, Matcher, SponsorRanking, DEFAULT_MIN_SCORE};
pub use scoring::{audience_score, calculate_match_score, calculate_match_score_with_weights, get_match_quality};
