//! Derived metrics built on top of the scoring engine.
//!
//! Every function in the submodules is pure: scores are passed in as
//! [`ScoreBreakdown`]s and reference tables are supplied by the caller.
//! [`MovieAnalytics`] bundles an engine with its reference tables for
//! callers that just want to hand over movie records.

pub mod cast;
pub mod divergence;
pub mod era;
pub mod franchise;
pub mod genre;
pub mod ranking;
pub mod rewatchability;

pub use cast::{analyze_cast, CastAnalysis, NotableActor, PowerLevel};
pub use divergence::{
    audience_critic_divergence, estimate_critic_score, Divergence, DivergenceCategory,
};
pub use era::{era_comparison, z_to_percentile, EraComparison};
pub use franchise::{detect_trend, franchise_report, FranchiseEntry, FranchiseReport, Trend};
pub use genre::{genre_adjusted_score, GenreAdjustedScore};
pub use ranking::{rank_scored, RankFilter, RankedMovie, DEFAULT_RANK_LIMIT};
pub use rewatchability::{calculate_rewatchability, RewatchCategory, Rewatchability};

use crate::config::{CinescoreConfig, ReferenceTables};
use crate::core::{MovieRecord, ScoreBreakdown};
use crate::scoring::ScoringEngine;

/// A movie paired with its score breakdown.
#[derive(Debug, Clone)]
pub struct ScoredMovie<'a> {
    pub movie: &'a MovieRecord,
    pub breakdown: ScoreBreakdown,
}

impl<'a> ScoredMovie<'a> {
    pub fn score(engine: &ScoringEngine, movie: &'a MovieRecord) -> Self {
        Self {
            movie,
            breakdown: engine.score(movie),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MovieAnalytics {
    engine: ScoringEngine,
    reference: ReferenceTables,
}

impl MovieAnalytics {
    pub fn new(engine: ScoringEngine, reference: ReferenceTables) -> Self {
        Self { engine, reference }
    }

    pub fn from_config(config: &CinescoreConfig) -> Self {
        Self::new(ScoringEngine::from_config(config), config.reference.clone())
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    pub fn genre_adjusted_score(&self, movie: &MovieRecord) -> GenreAdjustedScore {
        genre_adjusted_score(movie, &self.engine.score(movie), &self.reference)
    }

    pub fn era_comparison(&self, movie: &MovieRecord) -> EraComparison {
        era_comparison(movie, &self.engine.score(movie), &self.reference)
    }

    pub fn divergence(&self, movie: &MovieRecord, critic_score: Option<f64>) -> Divergence {
        audience_critic_divergence(movie, critic_score)
    }

    pub fn rewatchability(&self, movie: &MovieRecord) -> Rewatchability {
        calculate_rewatchability(movie)
    }

    pub fn cast(&self, movie: &MovieRecord) -> CastAnalysis {
        analyze_cast(movie)
    }

    /// Score and analyze a franchise; `None` for an empty list.
    pub fn franchise(&self, name: &str, movies: &[MovieRecord]) -> Option<FranchiseReport> {
        let scored = movies
            .iter()
            .map(|m| ScoredMovie::score(&self.engine, m))
            .collect();
        franchise_report(name, scored)
    }

    /// Filter, score and rank movies.
    pub fn rank(&self, movies: &[MovieRecord], filter: &RankFilter) -> Vec<RankedMovie> {
        let scored = movies
            .iter()
            .filter(|m| filter.matches(m))
            .map(|m| ScoredMovie::score(&self.engine, m))
            .collect();
        rank_scored(scored, filter.limit)
    }
}
