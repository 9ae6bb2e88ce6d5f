//! Property-based tests for weights, normalizers and grading.

use cinescore::config::WeightConfig;
use cinescore::core::{Grade, MovieRecord};
use cinescore::scoring::normalizers::{
    normalize_cast_star_power, normalize_popularity, normalize_vote_average,
    normalize_vote_count,
};
use cinescore::{score_to_grade, ScoringEngine};
use proptest::prelude::*;

fn weight() -> impl Strategy<Value = f64> {
    0.0f64..=1.0
}

fn weights() -> impl Strategy<Value = WeightConfig> {
    (
        weight(),
        weight(),
        weight(),
        weight(),
        weight(),
        weight(),
        weight(),
    )
        .prop_map(|(a, b, c, d, e, f, g)| {
            WeightConfig::new(a, b, c, d, e, f, g).expect("weights in range")
        })
}

/// Weights built field by field, skipping `WeightConfig::new` validation.
fn raw_weights() -> impl Strategy<Value = WeightConfig> {
    let raw = || -2.0f64..3.0;
    (raw(), raw(), raw(), raw(), raw(), raw(), raw()).prop_map(|(a, b, c, d, e, f, g)| {
        WeightConfig {
            vote_average: a,
            vote_count: b,
            popularity: c,
            revenue: d,
            runtime_quality: e,
            release_recency: f,
            cast_star_power: g,
        }
    })
}

proptest! {
    /// Renormalized weights always sum to one.
    #[test]
    fn prop_normalized_weights_sum_to_one(config in weights()) {
        let sum = config.normalize().sum();
        prop_assert!((sum - 1.0).abs() < 1e-9, "sum was {}", sum);
    }

    /// Rating normalization never decreases as the rating grows.
    #[test]
    fn prop_rating_normalizer_is_monotonic(a in 0.0f64..=10.0, b in 0.0f64..=10.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(normalize_vote_average(low) <= normalize_vote_average(high));
    }

    /// Every normalizer stays within 0-100.
    #[test]
    fn prop_normalizers_are_bounded(
        rating in -5.0f64..20.0,
        votes in 0u64..10_000_000,
        popularity in 0.0f64..100_000.0,
        cast in prop::collection::vec(0.0f64..10_000.0, 0..15),
    ) {
        for value in [
            normalize_vote_average(rating),
            normalize_vote_count(votes),
            normalize_popularity(popularity),
            normalize_cast_star_power(&cast),
        ] {
            prop_assert!((0.0..=100.0).contains(&value), "out of range: {}", value);
        }
    }

    /// Total scores stay within 0-100 under any weights.
    #[test]
    fn prop_total_score_is_bounded(
        config in weights(),
        rating in 0.0f64..=10.0,
        votes in 0u64..100_000,
        revenue in 0u64..5_000_000_000,
        budget in 0u64..500_000_000,
        runtime in prop::option::of(1u32..400),
    ) {
        let mut movie = MovieRecord::new(1, "Generated");
        movie.vote_average = rating;
        movie.vote_count = votes;
        movie.revenue = revenue;
        movie.budget = budget;
        movie.runtime = runtime;

        let breakdown = ScoringEngine::new(config).with_reference_year(2025).score(&movie);
        prop_assert!((0.0..=100.0).contains(&breakdown.total_score));
        prop_assert_eq!(breakdown.features.len(), 7);
    }

    /// Out-of-range weights set directly on the struct cannot push a total outside 0-100.
    #[test]
    fn prop_total_score_is_bounded_for_unvalidated_weights(
        config in raw_weights(),
        rating in 0.0f64..=10.0,
        votes in 0u64..100_000,
        popularity in 0.0f64..500.0,
    ) {
        let mut movie = MovieRecord::new(1, "Generated");
        movie.vote_average = rating;
        movie.vote_count = votes;
        movie.popularity = popularity;

        let breakdown = ScoringEngine::new(config).with_reference_year(2025).score(&movie);
        prop_assert!(
            (0.0..=100.0).contains(&breakdown.total_score),
            "total was {}",
            breakdown.total_score
        );
        prop_assert!(breakdown.features.iter().all(|f| f.weight >= 0.0));
    }

    /// The grade ladder never goes down as the score goes up.
    #[test]
    fn prop_grade_is_monotonic(a in 0.0f64..=100.0, b in 0.0f64..=100.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        // Grade orders best first
        prop_assert!(score_to_grade(high) <= score_to_grade(low));
    }
}

#[test]
fn test_grade_boundaries_take_the_higher_grade() {
    assert_eq!(score_to_grade(94.9), Grade::A);
    assert_eq!(score_to_grade(95.0), Grade::APlus);
    assert_eq!(score_to_grade(85.0), Grade::AMinus);
    assert_eq!(score_to_grade(39.99), Grade::F);
    assert_eq!(score_to_grade(40.0), Grade::DMinus);
}

#[test]
fn test_rating_curve_literals() {
    assert_eq!(normalize_vote_average(9.0), 96.0);
    assert_eq!(normalize_vote_average(7.0), 70.0);
    assert_eq!(normalize_vote_average(10.0), 100.0);
    assert_eq!(normalize_vote_average(0.0), 0.0);
}
