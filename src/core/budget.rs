use crate::core::category::cost_per_attendee;
use crate::models::{BudgetRange, Event};

/// Fixed overhead added to every event estimate (venue, logistics)
pub const FIXED_OVERHEAD: f64 = 10_000.0;

/// Estimate how much money an event needs from its category and audience
#[inline]
pub fn estimate_event_budget(event: &Event) -> f64 {
    event.audience_size as f64 * cost_per_attendee(event.category) + FIXED_OVERHEAD
}

/// Calculate budget score (0-100)
///
/// Events needing less than the sponsor's floor are penalised gently;
/// events over the ceiling fall off twice as fast and bottom out at 20.
/// A zero ceiling with a positive estimate scores 20.
#[inline]
pub fn budget_score(estimate: f64, range: &BudgetRange) -> f64 {
    if range.contains(estimate) {
        return 100.0;
    }

    if estimate < range.min {
        // min > estimate >= 0, so min is positive here
        let percent_diff = (range.min - estimate) / range.min * 100.0;
        if percent_diff <= 30.0 {
            return 80.0;
        }
        return (100.0 - percent_diff).max(40.0);
    }

    if range.max <= 0.0 {
        return 20.0;
    }

    let percent_diff = (estimate - range.max) / range.max * 100.0;
    if percent_diff > 50.0 {
        return 20.0;
    }
    (100.0 - percent_diff * 2.0).max(30.0)
}
