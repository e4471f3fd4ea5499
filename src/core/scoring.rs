use crate::models::{AudienceRange, Event, MatchBreakdown, MatchQuality, MatchResult, ScoringWeights, Sponsor};
use crate::core::{
    budget::{budget_score, estimate_event_budget},
    category::category_score,
    location::location_score,
};

/// Calculate the compatibility (0-100) between an event and a sponsor
///
/// Scoring formula:
/// score = round(
///     category_score * 0.35 +      # Preferred or adjacent category
///     budget_score * 0.30 +        # Estimated event cost vs sponsor envelope
///     audience_score * 0.20 +      # Attendance vs preferred band
///     location_score * 0.15        # Textual locality overlap
/// )
///
/// The total is taken from the unrounded factor scores; the breakdown
/// values are rounded separately and never feed back into it.
pub fn calculate_match_score(event: &Event, sponsor: &Sponsor) -> MatchResult {
    calculate_match_score_with_weights(event, sponsor, &ScoringWeights::default())
}

/// Same as [`calculate_match_score`] with caller-supplied weights
pub fn calculate_match_score_with_weights(
    event: &Event,
    sponsor: &Sponsor,
    weights: &ScoringWeights,
) -> MatchResult {
    let category = category_score(event.category, &sponsor.preferences.categories);

    let estimated_budget = estimate_event_budget(event);
    let budget = budget_score(estimated_budget, &sponsor.budget_range);

    let audience = audience_score(event.audience_size, &sponsor.preferences.audience_size);

    let location = location_score(&event.location, &sponsor.location);

    let total = category * weights.category
        + budget * weights.budget
        + audience * weights.audience
        + location * weights.location;

    MatchResult {
        score: to_percent(total),
        breakdown: MatchBreakdown {
            category: to_percent(category),
            budget: to_percent(budget),
            audience: to_percent(audience),
            location: to_percent(location),
        },
    }
}

/// Calculate audience score (0-100)
///
/// Audiences above the preferred band are treated favourably (more exposure),
/// those below it are penalised harder. A zero upper bound with a positive
/// audience scores 60.
#[inline]
pub fn audience_score(audience: u32, preference: &AudienceRange) -> f64 {
    if preference.contains(audience) {
        return 100.0;
    }

    let audience_f = audience as f64;

    if audience < preference.min {
        // min > audience >= 0, so min is positive here
        let min = preference.min as f64;
        let percent_diff = (min - audience_f) / min * 100.0;
        if percent_diff <= 40.0 {
            return 70.0;
        }
        return (100.0 - percent_diff).max(30.0);
    }

    if preference.max == 0 {
        return 60.0;
    }

    let max = preference.max as f64;
    let percent_diff = (audience_f - max) / max * 100.0;
    if percent_diff <= 50.0 {
        return 90.0;
    }
    (100.0 - percent_diff / 2.0).max(60.0)
}

/// Categorical label for a score
#[inline]
pub fn get_match_quality(score: u8) -> MatchQuality {
    MatchQuality::from_score(score)
}

#[inline]
fn to_percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}
