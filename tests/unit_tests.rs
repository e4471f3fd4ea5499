// Unit tests for Sponsor Match

use sponsor_match::core::{
    budget::{budget_score, estimate_event_budget},
    category::{category_score, cost_per_attendee},
    location::location_score,
    scoring::{audience_score, calculate_match_score},
};
use sponsor_match::models::{AudienceRange, BudgetRange, Category, Event, Sponsor, SponsorPreferences};

fn devfest() -> Event {
    Event {
        id: Some("devfest".to_string()),
        category: Category::Hackathon,
        location: "San Francisco, CA".to_string(),
        audience_size: 500,
    }
}

fn acme() -> Sponsor {
    Sponsor {
        id: Some("acme".to_string()),
        budget_range: BudgetRange {
            min: 50_000.0,
            max: 150_000.0,
        },
        location: "San Francisco, CA".to_string(),
        preferences: SponsorPreferences {
            categories: vec![Category::Hackathon, Category::Workshop, Category::Competition],
            audience_size: AudienceRange { min: 200, max: 1000 },
        },
    }
}

#[test]
fn test_reference_scenario_scores_perfectly() {
    let event = devfest();
    let sponsor = acme();

    assert_eq!(estimate_event_budget(&event), 60_000.0);

    let result = calculate_match_score(&event, &sponsor);

    assert_eq!(result.breakdown.category, 100);
    assert_eq!(result.breakdown.budget, 100);
    assert_eq!(result.breakdown.audience, 100);
    assert_eq!(result.breakdown.location, 100);
    assert_eq!(result.score, 100);
}

#[test]
fn test_sports_vs_cultural_is_unrelated() {
    let mut event = devfest();
    event.category = Category::Sports;
    let mut sponsor = acme();
    sponsor.preferences.categories = vec![Category::Cultural];

    let result = calculate_match_score(&event, &sponsor);

    assert_eq!(result.breakdown.category, 20);
}

#[test]
fn test_small_audience_penalised() {
    let preference = AudienceRange { min: 200, max: 1000 };
    assert_eq!(audience_score(50, &preference), 30.0);
}

#[test]
fn test_exact_category_ignores_other_fields() {
    let event = Event {
        id: None,
        category: Category::Cultural,
        location: "Kyoto".to_string(),
        audience_size: 1,
    };
    let sponsor = Sponsor {
        id: None,
        budget_range: BudgetRange { min: 0.0, max: 0.0 },
        location: "Lagos, Nigeria".to_string(),
        preferences: SponsorPreferences {
            categories: vec![Category::Cultural],
            audience_size: AudienceRange { min: 0, max: 0 },
        },
    };

    let result = calculate_match_score(&event, &sponsor);

    assert_eq!(result.breakdown.category, 100);
    assert_eq!(result.breakdown.budget, 20);
    assert_eq!(result.breakdown.audience, 60);
    assert_eq!(result.breakdown.location, 40);
}

#[test]
fn test_locations_case_insensitive() {
    assert_eq!(location_score("NEW YORK, NY", "new york, ny"), 100.0);
}

#[test]
fn test_every_category_has_a_cost() {
    for category in Category::ALL {
        assert!(cost_per_attendee(category) > 0.0);
        assert_eq!(category_score(category, &[category]), 100.0);
    }
}

#[test]
fn test_budget_far_over_ceiling() {
    let range = BudgetRange {
        min: 5_000.0,
        max: 20_000.0,
    };
    let event = Event {
        id: None,
        category: Category::Hackathon,
        location: "Austin, TX".to_string(),
        audience_size: 1000,
    };

    // 110000 is 450% over 20000
    assert_eq!(budget_score(estimate_event_budget(&event), &range), 20.0);
}

#[test]
fn test_scoring_is_deterministic() {
    let event = devfest();
    let sponsor = acme();

    let first = calculate_match_score(&event, &sponsor);
    let second = calculate_match_score(&event, &sponsor);

    assert_eq!(first, second);
}
