// Export modules for library usage
pub mod analytics;
pub mod cli;
pub mod commands;
pub mod comparison;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod observability;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    CastMember, DataConfidence, Feature, FeatureScore, Grade, MovieRecord, ScoreBreakdown,
    ScoreCategory,
};

pub use crate::scoring::{current_year, data_confidence, score_to_grade, ScoringEngine};

pub use crate::comparison::{
    ArgumentPoint, BarPoint, ComparisonResult, Confidence, Importance, MovieComparator,
    RadarPoint, Side,
};

pub use crate::analytics::{
    CastAnalysis, Divergence, EraComparison, FranchiseReport, GenreAdjustedScore, MovieAnalytics,
    RankFilter, RankedMovie, Rewatchability,
};

pub use crate::config::{CinescoreConfig, RecencyMode, ReferenceTables, WeightConfig};

pub use crate::errors::{CinescoreError, Result};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
