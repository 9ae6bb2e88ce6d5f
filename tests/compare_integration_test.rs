mod common;

use cinescore::comparison::{classify_outcome, Confidence, Importance, MovieComparator, Side};
use cinescore::core::{Feature, MovieRecord};
use cinescore::config::WeightConfig;
use cinescore::ScoringEngine;
use common::{engine, golden_movie, load_fixture, REFERENCE_YEAR};
use pretty_assertions::assert_eq;

fn comparator() -> MovieComparator {
    MovieComparator::new(engine())
}

fn rating_only_comparator() -> MovieComparator {
    let weights = WeightConfig::new(1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0).expect("valid weights");
    MovieComparator::new(ScoringEngine::new(weights).with_reference_year(REFERENCE_YEAR))
}

fn rated(id: i64, title: &str, vote_average: f64) -> MovieRecord {
    let mut movie = MovieRecord::new(id, title);
    movie.vote_average = vote_average;
    movie
}

#[test]
fn test_scored_gap_of_exactly_five_is_clear() {
    let result =
        rating_only_comparator().compare(&rated(1, "Upper", 6.502), &rated(2, "Lower", 6.002));

    assert_eq!(result.movie1_breakdown.total_score, 65.02);
    assert_eq!(result.movie2_breakdown.total_score, 60.02);
    assert_eq!(result.score_difference, 5.0);
    assert_eq!(result.winner, Side::First);
    assert_eq!(result.confidence, Confidence::Clear);

    let rating = result
        .arguments
        .iter()
        .find(|a| a.feature == Feature::VoteAverage)
        .expect("rating argument");
    assert_eq!(rating.difference, 5.0);
    assert_eq!(rating.winner, Side::First);
}

#[test]
fn test_scored_gap_of_exactly_two_has_a_leader() {
    let result =
        rating_only_comparator().compare(&rated(1, "Upper", 6.402), &rated(2, "Lower", 6.202));

    assert_eq!(result.score_difference, 2.0);
    assert_eq!(result.winner, Side::First);
    assert_eq!(result.confidence, Confidence::Close);
}

#[test]
fn test_scored_gap_under_two_is_a_tie() {
    let result =
        rating_only_comparator().compare(&rated(1, "Upper", 6.402), &rated(2, "Lower", 6.212));

    assert_eq!(result.score_difference, 1.9);
    assert_eq!(result.winner, Side::Tie);
    assert_eq!(result.confidence, Confidence::VeryClose);
}

#[test]
fn test_gap_just_under_two_points_is_a_tie() {
    assert_eq!(classify_outcome(71.9, 70.0), (Side::Tie, Confidence::VeryClose));
}

#[test]
fn test_gap_of_exactly_five_points_is_clear() {
    assert_eq!(classify_outcome(75.0, 70.0), (Side::First, Confidence::Clear));
    assert_eq!(classify_outcome(70.0, 75.0), (Side::Second, Confidence::Clear));
}

#[test]
fn test_golden_against_indie() {
    let golden = load_fixture("golden.json");
    let indie = load_fixture("indie.json");

    let result = comparator().compare(&golden, &indie);

    assert_eq!(result.winner, Side::First);
    assert_eq!(result.confidence, Confidence::Decisive);
    assert_eq!(result.movie1_breakdown.total_score, 86.13);
    assert!(result
        .verdict
        .starts_with("The Long Orbit decisively outperforms Quiet Harbor"));
    assert!(!result.verdict.contains("close call"));
}

#[test]
fn test_arguments_cover_every_feature_in_importance_order() {
    let golden = load_fixture("golden.json");
    let indie = load_fixture("indie.json");

    let result = comparator().compare(&golden, &indie);

    let order: Vec<Feature> = result.arguments.iter().map(|a| a.feature).collect();
    assert_eq!(
        order,
        vec![
            Feature::CastStarPower,
            Feature::Revenue,
            Feature::Popularity,
            Feature::VoteCount,
            Feature::VoteAverage,
            Feature::ReleaseRecency,
            Feature::RuntimeQuality,
        ]
    );

    let importance: Vec<Importance> = result.arguments.iter().map(|a| a.importance).collect();
    assert_eq!(
        importance,
        vec![
            Importance::High,
            Importance::High,
            Importance::High,
            Importance::High,
            Importance::Medium,
            Importance::Low,
            Importance::Low,
        ]
    );

    let recency = &result.arguments[5];
    assert_eq!(recency.winner, Side::Second);
    assert_eq!(recency.difference, -5.0);

    let runtime = &result.arguments[6];
    assert_eq!(runtime.winner, Side::Tie);
}

#[test]
fn test_identical_movies_tie() {
    let first = golden_movie();
    let mut second = golden_movie();
    second.id = 1002;
    second.title = "The Long Orbit (Director's Cut)".to_string();

    let result = comparator().compare(&first, &second);

    assert_eq!(result.winner, Side::Tie);
    assert_eq!(result.confidence, Confidence::VeryClose);
    assert_eq!(result.score_difference, 0.0);
    assert!(result.verdict.contains("essentially a tie"));
    assert!(result
        .arguments
        .iter()
        .all(|a| a.winner == Side::Tie && a.importance == Importance::Low));
}

#[test]
fn test_swapping_sides_mirrors_the_result() {
    let golden = load_fixture("golden.json");
    let indie = load_fixture("indie.json");

    let forward = comparator().compare(&golden, &indie);
    let backward = comparator().compare(&indie, &golden);

    assert_eq!(backward.winner, Side::Second);
    assert_eq!(forward.score_difference, backward.score_difference);
    assert_eq!(forward.confidence, backward.confidence);
}

#[test]
fn test_chart_series_follow_feature_order() {
    let result = comparator().compare(&load_fixture("golden.json"), &load_fixture("indie.json"));

    assert_eq!(result.radar_data.len(), 7);
    assert_eq!(result.bar_data.len(), 7);
    assert_eq!(result.radar_data[0].feature, "User Rating");
    assert_eq!(result.radar_data[0].movie1, 89.5);
    assert_eq!(result.radar_data[0].movie2, 64.0);
    assert_eq!(result.radar_data[0].difference, 25.5);
}

#[test]
fn test_one_off_weights_apply_to_both_sides() {
    let golden = load_fixture("golden.json");
    let indie = load_fixture("indie.json");
    // recency is the only feature the indie film wins
    let weights = WeightConfig::new(0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0).unwrap();

    let result = comparator().compare_with_weights(&golden, &indie, &weights);

    assert_eq!(result.winner, Side::Second);
    assert_eq!(result.confidence, Confidence::Clear);
    assert_eq!(result.score_difference, 5.0);
}
