//! Explainable scoring engine for movies.
//!
//! Produces a weighted total score with per-feature attribution. The engine
//! carries its configuration (weights, recency mode, reference year) as plain
//! values; scoring is a pure function of the engine and the movie record.

use chrono::Datelike;
use tracing::{debug, trace};

use super::explanations::{
    explain_popularity, explain_recency, explain_revenue, explain_runtime, explain_star_power,
    explain_vote_average, explain_vote_count,
};
use super::normalizers::{
    data_confidence, normalize_cast_star_power, normalize_popularity, normalize_release_recency,
    normalize_revenue, normalize_runtime, normalize_vote_average, normalize_vote_count, round2,
    score_to_grade,
};
use crate::config::{CinescoreConfig, RecencyMode, WeightConfig};
use crate::core::{Feature, FeatureScore, Grade, MovieRecord, ScoreBreakdown};

/// Cast members considered for star power.
const STAR_POWER_DEPTH: usize = 10;
/// Cast members summed into the displayed star power raw value.
const STAR_POWER_DISPLAY_DEPTH: usize = 5;
const MAX_HIGHLIGHTS: usize = 3;
const STRENGTH_THRESHOLD: f64 = 70.0;
const WEAKNESS_THRESHOLD: f64 = 50.0;

/// Current calendar year, used when no reference year is configured.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringEngine {
    weights: WeightConfig,
    recency_mode: RecencyMode,
    reference_year: i32,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(WeightConfig::default())
    }
}

impl ScoringEngine {
    /// Engine with the given weights (renormalized), neutral recency and the
    /// current year as reference.
    pub fn new(weights: WeightConfig) -> Self {
        Self {
            weights: weights.normalize(),
            recency_mode: RecencyMode::Neutral,
            reference_year: current_year(),
        }
    }

    pub fn from_config(config: &CinescoreConfig) -> Self {
        let engine = Self::new(config.weights()).with_recency_mode(config.scoring.recency_mode);
        match config.scoring.reference_year {
            Some(year) => engine.with_reference_year(year),
            None => engine,
        }
    }

    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.reference_year = year;
        self
    }

    pub fn with_recency_mode(mut self, mode: RecencyMode) -> Self {
        self.recency_mode = mode;
        self
    }

    pub fn with_weights(mut self, weights: WeightConfig) -> Self {
        self.weights = weights.normalize();
        self
    }

    /// The renormalized weights this engine scores with.
    pub fn weights(&self) -> &WeightConfig {
        &self.weights
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    pub fn recency_mode(&self) -> RecencyMode {
        self.recency_mode
    }

    /// Score a movie with the engine's weights.
    pub fn score(&self, movie: &MovieRecord) -> ScoreBreakdown {
        self.score_with_weights(movie, &self.weights)
    }

    /// Score a movie with one-off weights; they are renormalized first.
    pub fn score_with_weights(&self, movie: &MovieRecord, weights: &WeightConfig) -> ScoreBreakdown {
        let weights = weights.normalize();
        let features: Vec<FeatureScore> = Feature::ALL
            .iter()
            .map(|&feature| self.feature_score(movie, feature, &weights))
            .collect();

        let total: f64 = features.iter().map(|f| f.weighted_score).sum();
        let grade = score_to_grade(total);
        let (strengths, weaknesses) = highlights(&features);
        let summary = generate_summary(movie, total, grade, &features);

        debug!(
            movie_id = movie.id,
            total = round2(total),
            grade = %grade,
            "scored movie"
        );

        ScoreBreakdown {
            movie_id: movie.id,
            movie_title: movie.title.clone(),
            total_score: round2(total),
            grade,
            features,
            strengths,
            weaknesses,
            summary,
            data_confidence: data_confidence(movie.vote_count, movie.popularity),
        }
    }

    fn feature_score(
        &self,
        movie: &MovieRecord,
        feature: Feature,
        weights: &WeightConfig,
    ) -> FeatureScore {
        let (raw_value, normalized_value, explanation) = match feature {
            Feature::VoteAverage => (
                movie.vote_average,
                normalize_vote_average(movie.vote_average),
                explain_vote_average(movie.vote_average),
            ),
            Feature::VoteCount => (
                movie.vote_count as f64,
                normalize_vote_count(movie.vote_count),
                explain_vote_count(movie.vote_count),
            ),
            Feature::Popularity => (
                movie.popularity,
                normalize_popularity(movie.popularity),
                explain_popularity(movie.popularity),
            ),
            Feature::Revenue => (
                movie.revenue as f64,
                normalize_revenue(movie.revenue, movie.budget),
                explain_revenue(movie),
            ),
            Feature::RuntimeQuality => (
                movie.runtime.unwrap_or(0) as f64,
                normalize_runtime(movie.runtime),
                explain_runtime(movie.runtime),
            ),
            Feature::ReleaseRecency => {
                let year = movie.year();
                (
                    year.unwrap_or(0) as f64,
                    normalize_release_recency(year, self.reference_year, self.recency_mode),
                    explain_recency(year, self.reference_year),
                )
            }
            Feature::CastStarPower => {
                let popularities: Vec<f64> = movie
                    .cast
                    .iter()
                    .take(STAR_POWER_DEPTH)
                    .map(|c| c.popularity)
                    .collect();
                let displayed: f64 = popularities.iter().take(STAR_POWER_DISPLAY_DEPTH).sum();
                (
                    displayed,
                    normalize_cast_star_power(&popularities),
                    explain_star_power(&movie.cast[..movie.cast.len().min(STAR_POWER_DISPLAY_DEPTH)]),
                )
            }
        };

        let weight = weights.weight_for(feature);
        trace!(feature = feature.name(), raw_value, normalized_value, weight);

        FeatureScore {
            feature,
            display_name: feature.display_name().to_string(),
            raw_value,
            normalized_value,
            weight,
            weighted_score: normalized_value * weight,
            category: feature.category(),
            explanation,
        }
    }
}

fn describe_highlight(feature: &FeatureScore) -> String {
    format!(
        "{} ({:.0}/100)",
        feature.display_name, feature.normalized_value
    )
}

/// Strengths are the top three features scoring at least 70; weaknesses the
/// bottom three scoring under 50. Both keep descending score order.
fn highlights(features: &[FeatureScore]) -> (Vec<String>, Vec<String>) {
    let mut sorted: Vec<&FeatureScore> = features.iter().collect();
    // stable: equal scores keep scoring order
    sorted.sort_by(|a, b| b.normalized_value.total_cmp(&a.normalized_value));

    let strengths = sorted
        .iter()
        .take(MAX_HIGHLIGHTS)
        .filter(|f| f.normalized_value >= STRENGTH_THRESHOLD)
        .map(|f| describe_highlight(f))
        .collect();

    let bottom_start = sorted.len().saturating_sub(MAX_HIGHLIGHTS);
    let weaknesses = sorted[bottom_start..]
        .iter()
        .filter(|f| f.normalized_value < WEAKNESS_THRESHOLD)
        .map(|f| describe_highlight(f))
        .collect();

    (strengths, weaknesses)
}

fn tier_phrase(title: &str, score: f64) -> String {
    if score >= 80.0 {
        format!("{title} is an outstanding film")
    } else if score >= 70.0 {
        format!("{title} is a very good film")
    } else if score >= 60.0 {
        format!("{title} is a solid film")
    } else if score >= 50.0 {
        format!("{title} is an average film")
    } else {
        format!("{title} falls below average")
    }
}

fn grade_article(grade: Grade) -> &'static str {
    match grade {
        Grade::APlus | Grade::A | Grade::AMinus | Grade::F => "an",
        _ => "a",
    }
}

/// Feature with the largest weighted contribution; the first one wins ties.
pub(crate) fn top_contributor(features: &[FeatureScore]) -> Option<&FeatureScore> {
    features.iter().fold(None, |best: Option<&FeatureScore>, f| match best {
        Some(b) if b.weighted_score >= f.weighted_score => Some(b),
        _ => Some(f),
    })
}

fn generate_summary(movie: &MovieRecord, score: f64, grade: Grade, features: &[FeatureScore]) -> String {
    let mut parts = vec![format!(
        "{}, earning {} {} grade ({:.1}/100)",
        tier_phrase(&movie.title, score),
        grade_article(grade),
        grade,
        score
    )];

    if let Some(top) = top_contributor(features) {
        parts.push(format!(
            "Its strongest aspect is {}",
            top.display_name.to_lowercase()
        ));
    }

    if let Some(director) = movie.director.as_deref().filter(|d| !d.is_empty()) {
        parts.push(format!("Directed by {director}"));
    }

    parts.join(". ") + "."
}
