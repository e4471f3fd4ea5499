use crate::models::Category;

/// Sponsor prefers the event's own category
pub const EXACT_MATCH_SCORE: f64 = 100.0;
/// Sponsor prefers a category adjacent to the event's
pub const RELATED_MATCH_SCORE: f64 = 60.0;
/// No overlap; cross-category sponsorship still happens
pub const BASELINE_SCORE: f64 = 20.0;

/// Categories considered adjacent to the given one
pub const fn related_categories(category: Category) -> &'static [Category] {
    match category {
        Category::Hackathon => &[Category::Competition, Category::Workshop],
        Category::Competition => &[Category::Hackathon, Category::Sports],
        Category::Sports => &[Category::Competition, Category::CollegeFest],
        Category::CollegeFest => &[Category::Cultural, Category::Sports],
        Category::Cultural => &[Category::CollegeFest, Category::Workshop],
        Category::Workshop => &[Category::Hackathon, Category::Cultural],
    }
}

/// Estimated spend per attendee, used for budget estimation
pub const fn cost_per_attendee(category: Category) -> f64 {
    match category {
        Category::Hackathon => 100.0,
        Category::Competition => 80.0,
        Category::Sports => 60.0,
        Category::CollegeFest => 50.0,
        Category::Cultural => 70.0,
        Category::Workshop => 90.0,
    }
}

/// Calculate category affinity score (0-100)
#[inline]
pub fn category_score(event_category: Category, preferred: &[Category]) -> f64 {
    if preferred.contains(&event_category) {
        return EXACT_MATCH_SCORE;
    }

    let related = related_categories(event_category);
    if preferred.iter().any(|category| related.contains(category)) {
        return RELATED_MATCH_SCORE;
    }

    BASELINE_SCORE
}
