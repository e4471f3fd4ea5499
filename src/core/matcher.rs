use crate::models::{Event, EventMatch, ScoringWeights, Sponsor, SponsorMatch};
use crate::core::scoring::calculate_match_score_with_weights;

/// Minimum score a candidate needs to be listed when callers don't say otherwise
pub const DEFAULT_MIN_SCORE: u8 = 50;

/// Sponsors ranked against one event
#[derive(Debug)]
pub struct SponsorRanking {
    pub matches: Vec<SponsorMatch>,
    pub total_candidates: usize,
}

/// Ranks candidates by match score using a fixed set of weights
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score every sponsor against the event, keep those at or above
    /// `min_score`, and order them by descending score
    ///
    /// Ties keep their input order. `limit` truncates after sorting.
    pub fn filter_sponsors(
        &self,
        event: &Event,
        sponsors: &[Sponsor],
        min_score: u8,
        limit: Option<usize>,
    ) -> SponsorRanking {
        let total_candidates = sponsors.len();

        let mut matches: Vec<SponsorMatch> = sponsors
            .iter()
            .filter_map(|sponsor| {
                let result = calculate_match_score_with_weights(event, sponsor, &self.weights);

                tracing::debug!(
                    "Scored sponsor {:?} for event {:?}: {} {:?}",
                    sponsor.id,
                    event.id,
                    result.score,
                    result.breakdown
                );

                (result.score >= min_score).then(|| SponsorMatch {
                    sponsor: sponsor.clone(),
                    match_score: result.score,
                })
            })
            .collect();

        matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        if let Some(limit) = limit {
            matches.truncate(limit);
        }

        SponsorRanking {
            matches,
            total_candidates,
        }
    }

    /// Reverse direction of [`Matcher::filter_sponsors`]: rank events for one sponsor
    pub fn rank_events(&self, sponsor: &Sponsor, events: &[Event], min_score: u8) -> Vec<EventMatch> {
        let mut matches: Vec<EventMatch> = events
            .iter()
            .filter_map(|event| {
                let score = calculate_match_score_with_weights(event, sponsor, &self.weights).score;
                (score >= min_score).then(|| EventMatch {
                    event: event.clone(),
                    match_score: score,
                })
            })
            .collect();

        matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        matches
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Sponsors scoring at least `min_score` against the event, best first
pub fn filter_sponsors_by_match_score(
    event: &Event,
    sponsors: &[Sponsor],
    min_score: u8,
) -> Vec<SponsorMatch> {
    Matcher::with_default_weights()
        .filter_sponsors(event, sponsors, min_score, None)
        .matches
}

/// Events scoring at least `min_score` against the sponsor, best first
pub fn rank_events_for_sponsor(sponsor: &Sponsor, events: &[Event], min_score: u8) -> Vec<EventMatch> {
    Matcher::with_default_weights().rank_events(sponsor, events, min_score)
}
