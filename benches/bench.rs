// Criterion benchmarks for Sponsor Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sponsor_match::core::{calculate_match_score, location::location_score, Matcher};
use sponsor_match::models::{AudienceRange, BudgetRange, Category, Event, Sponsor, SponsorPreferences};

const CITIES: [&str; 5] = [
    "San Francisco, CA",
    "Los Angeles, CA",
    "Austin, TX",
    "Boston, MA",
    "Seattle, WA",
];

fn create_event() -> Event {
    Event {
        id: Some("devfest".to_string()),
        category: Category::Hackathon,
        location: "San Francisco, CA".to_string(),
        audience_size: 500,
    }
}

fn create_sponsor(id: usize) -> Sponsor {
    let category = Category::ALL[id % Category::ALL.len()];
    let floor = 10_000.0 + (id % 20) as f64 * 5_000.0;

    Sponsor {
        id: Some(id.to_string()),
        budget_range: BudgetRange {
            min: floor,
            max: floor * 3.0,
        },
        location: CITIES[id % CITIES.len()].to_string(),
        preferences: SponsorPreferences {
            categories: vec![category],
            audience_size: AudienceRange {
                min: 100 + (id % 10) as u32 * 50,
                max: 1000 + (id % 10) as u32 * 200,
            },
        },
    }
}

fn bench_match_score(c: &mut Criterion) {
    let event = create_event();
    let sponsor = create_sponsor(3);

    c.bench_function("calculate_match_score", |b| {
        b.iter(|| calculate_match_score(black_box(&event), black_box(&sponsor)));
    });
}

fn bench_location_score(c: &mut Criterion) {
    c.bench_function("location_score", |b| {
        b.iter(|| location_score(black_box("San Francisco, CA"), black_box("Oakland, CA")));
    });
}

fn bench_filtering(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let event = create_event();

    let mut group = c.benchmark_group("filtering");

    for sponsor_count in [10, 50, 100, 500, 1000].iter() {
        let sponsors: Vec<Sponsor> = (0..*sponsor_count).map(create_sponsor).collect();

        group.bench_with_input(
            BenchmarkId::new("filter_sponsors", sponsor_count),
            sponsor_count,
            |b, _| {
                b.iter(|| {
                    matcher.filter_sponsors(
                        black_box(&event),
                        black_box(&sponsors),
                        black_box(50),
                        None,
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_match_score, bench_location_score, bench_filtering);

criterion_main!(benches);
