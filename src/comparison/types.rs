use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{Feature, ScoreBreakdown};

/// Which movie a comparison (or a single feature) favors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    #[serde(rename = "movie1")]
    First,
    #[serde(rename = "movie2")]
    Second,
    Tie,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Side::First => "movie1",
            Side::Second => "movie2",
            Side::Tie => "tie",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How large the overall score gap is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    VeryClose,
    Close,
    Clear,
    Decisive,
}

impl Confidence {
    pub fn as_str(self) -> &'static str {
        match self {
            Confidence::VeryClose => "very_close",
            Confidence::Close => "close",
            Confidence::Clear => "clear",
            Confidence::Decisive => "decisive",
        }
    }

    pub fn is_close_call(self) -> bool {
        matches!(self, Confidence::VeryClose | Confidence::Close)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much a single feature's difference matters. Orders high first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Importance {
    High,
    Medium,
    Low,
}

impl Importance {
    pub fn as_str(self) -> &'static str {
        match self {
            Importance::High => "high",
            Importance::Medium => "medium",
            Importance::Low => "low",
        }
    }
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One feature's head-to-head comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgumentPoint {
    /// Display name of the feature
    pub factor: String,
    pub feature: Feature,
    pub winner: Side,
    pub movie1_value: String,
    pub movie2_value: String,
    /// First movie's normalized value minus the second's
    pub difference: f64,
    pub importance: Importance,
    pub explanation: String,
}

/// Radar chart entry: both normalized values for one feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarPoint {
    pub feature: String,
    pub movie1: f64,
    pub movie2: f64,
    pub difference: f64,
}

/// Bar chart entry: normalized and weighted values for one feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarPoint {
    pub feature: String,
    pub movie1_score: f64,
    pub movie2_score: f64,
    pub movie1_weighted: f64,
    pub movie2_weighted: f64,
    pub difference: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub movie1_breakdown: ScoreBreakdown,
    pub movie2_breakdown: ScoreBreakdown,
    pub winner: Side,
    /// Absolute total-score gap
    pub score_difference: f64,
    pub confidence: Confidence,
    pub arguments: Vec<ArgumentPoint>,
    pub verdict: String,
    pub detailed_analysis: String,
    pub radar_data: Vec<RadarPoint>,
    pub bar_data: Vec<BarPoint>,
}

impl ComparisonResult {
    /// Breakdown of the winning movie, `None` on a tie.
    pub fn winner_breakdown(&self) -> Option<&ScoreBreakdown> {
        match self.winner {
            Side::First => Some(&self.movie1_breakdown),
            Side::Second => Some(&self.movie2_breakdown),
            Side::Tie => None,
        }
    }
}
