use tracing::debug;

use super::narrative::{bar_series, detailed_analysis, radar_series, verdict};
use super::types::{ArgumentPoint, ComparisonResult, Confidence, Importance, Side};
use crate::config::WeightConfig;
use crate::core::{Feature, FeatureScore, MovieRecord, ScoreBreakdown};
use crate::scoring::explanations::{format_millions, format_runtime, format_thousands};
use crate::scoring::normalizers::round2;
use crate::scoring::ScoringEngine;

/// Per-feature gap under which neither movie is credited.
const FEATURE_TIE_THRESHOLD: f64 = 5.0;

/// Head-to-head comparison of two movies with feature-level arguments.
#[derive(Debug, Clone, Default)]
pub struct MovieComparator {
    engine: ScoringEngine,
}

impl MovieComparator {
    pub fn new(engine: ScoringEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    /// Compare with the engine's weights.
    pub fn compare(&self, movie1: &MovieRecord, movie2: &MovieRecord) -> ComparisonResult {
        let breakdown1 = self.engine.score(movie1);
        let breakdown2 = self.engine.score(movie2);
        build_comparison(movie1, movie2, breakdown1, breakdown2)
    }

    /// Compare with one-off weights applied to both sides.
    pub fn compare_with_weights(
        &self,
        movie1: &MovieRecord,
        movie2: &MovieRecord,
        weights: &WeightConfig,
    ) -> ComparisonResult {
        let breakdown1 = self.engine.score_with_weights(movie1, weights);
        let breakdown2 = self.engine.score_with_weights(movie2, weights);
        build_comparison(movie1, movie2, breakdown1, breakdown2)
    }
}

fn build_comparison(
    movie1: &MovieRecord,
    movie2: &MovieRecord,
    breakdown1: ScoreBreakdown,
    breakdown2: ScoreBreakdown,
) -> ComparisonResult {
    let (winner, confidence) = classify_outcome(breakdown1.total_score, breakdown2.total_score);
    let score_difference = round2((breakdown1.total_score - breakdown2.total_score).abs());
    let arguments = generate_arguments(movie1, movie2, &breakdown1, &breakdown2);

    debug!(
        movie1 = movie1.id,
        movie2 = movie2.id,
        winner = %winner,
        confidence = %confidence,
        score_difference,
        "compared movies"
    );

    ComparisonResult {
        verdict: verdict(&breakdown1, &breakdown2, winner, confidence),
        detailed_analysis: detailed_analysis(&breakdown1, &breakdown2, &arguments),
        radar_data: radar_series(&breakdown1, &breakdown2),
        bar_data: bar_series(&breakdown1, &breakdown2),
        movie1_breakdown: breakdown1,
        movie2_breakdown: breakdown2,
        winner,
        score_difference,
        confidence,
        arguments,
    }
}

/// Overall winner and confidence band from two total scores.
///
/// Gaps under 2 points are a tie; under 5 close; under 15 clear; otherwise
/// decisive. Band edges belong to the wider band.
pub fn classify_outcome(score1: f64, score2: f64) -> (Side, Confidence) {
    // Totals are reported at two decimals; bands apply to that gap.
    let gap = round2((score1 - score2).abs());
    let leader = if score1 > score2 {
        Side::First
    } else {
        Side::Second
    };

    if gap < 2.0 {
        (Side::Tie, Confidence::VeryClose)
    } else if gap < 5.0 {
        (leader, Confidence::Close)
    } else if gap < 15.0 {
        (leader, Confidence::Clear)
    } else {
        (leader, Confidence::Decisive)
    }
}

/// Importance of a feature gap, combining its size and the feature's weight.
pub fn classify_importance(abs_difference: f64, weight: f64) -> Importance {
    let impact = abs_difference * weight;
    if impact > 10.0 || abs_difference > 30.0 {
        Importance::High
    } else if impact > 5.0 || abs_difference > 15.0 {
        Importance::Medium
    } else {
        Importance::Low
    }
}

fn feature_winner(difference: f64) -> Side {
    if difference.abs() < FEATURE_TIE_THRESHOLD {
        Side::Tie
    } else if difference > 0.0 {
        Side::First
    } else {
        Side::Second
    }
}

/// One argument per feature present in both breakdowns, most important first.
pub fn generate_arguments(
    movie1: &MovieRecord,
    movie2: &MovieRecord,
    breakdown1: &ScoreBreakdown,
    breakdown2: &ScoreBreakdown,
) -> Vec<ArgumentPoint> {
    let mut arguments: Vec<ArgumentPoint> = breakdown1
        .features
        .iter()
        .filter_map(|feat1| {
            let feat2 = breakdown2.feature(feat1.feature)?;
            let difference = round2(feat1.normalized_value - feat2.normalized_value);
            let winner = feature_winner(difference);

            Some(ArgumentPoint {
                factor: feat1.display_name.clone(),
                feature: feat1.feature,
                winner,
                movie1_value: format_feature_value(feat1, movie1),
                movie2_value: format_feature_value(feat2, movie2),
                difference,
                importance: classify_importance(difference.abs(), feat1.weight),
                explanation: explain_feature_comparison(feat1, feat2, movie1, movie2, winner),
            })
        })
        .collect();

    arguments.sort_by(|a, b| {
        a.importance
            .cmp(&b.importance)
            .then_with(|| b.difference.abs().total_cmp(&a.difference.abs()))
    });

    arguments
}

/// Raw feature value formatted for display next to the argument.
pub fn format_feature_value(score: &FeatureScore, movie: &MovieRecord) -> String {
    match score.feature {
        Feature::VoteAverage => format!("{:.1}/10", score.raw_value),
        Feature::VoteCount => format!("{} votes", format_thousands(score.raw_value as u64)),
        Feature::Popularity => format!("{:.1}", score.raw_value),
        Feature::Revenue if score.raw_value > 0.0 => format_millions(score.raw_value),
        Feature::Revenue => "N/A".to_string(),
        Feature::RuntimeQuality => match movie.runtime.filter(|&r| r > 0) {
            Some(minutes) => format_runtime(minutes),
            None => "N/A".to_string(),
        },
        Feature::ReleaseRecency if score.raw_value > 0.0 => format!("{}", score.raw_value as i32),
        Feature::ReleaseRecency => "N/A".to_string(),
        Feature::CastStarPower => match movie.cast.first() {
            Some(lead) => format!("Led by {}", lead.name),
            None => "Unknown cast".to_string(),
        },
    }
}

fn explain_feature_comparison(
    feat1: &FeatureScore,
    feat2: &FeatureScore,
    movie1: &MovieRecord,
    movie2: &MovieRecord,
    winner: Side,
) -> String {
    let (better, better_feat, worse_feat) = match winner {
        Side::Tie => {
            return format!(
                "Both films score similarly on {}",
                feat1.display_name.to_lowercase()
            )
        }
        Side::First => (&movie1.title, feat1, feat2),
        Side::Second => (&movie2.title, feat2, feat1),
    };

    match feat1.feature {
        Feature::VoteAverage => format!(
            "{better} has a higher user rating ({:.1} vs {:.1})",
            better_feat.raw_value, worse_feat.raw_value
        ),
        Feature::VoteCount => format!("{better} has more votes, giving it a more reliable rating"),
        Feature::Popularity => {
            format!("{better} has greater audience awareness and cultural impact")
        }
        Feature::Revenue => format!("{better} performed better at the box office"),
        Feature::RuntimeQuality => {
            format!("{better} has a more optimal runtime for engaging storytelling")
        }
        Feature::ReleaseRecency => format!("{better} scores better on the era/recency factor"),
        Feature::CastStarPower => format!("{better} has higher star power in its cast"),
    }
}
