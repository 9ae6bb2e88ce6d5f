use serde::{Deserialize, Serialize};
use std::fmt;

/// Categories for scoring factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    Ratings,
    Popularity,
    Financial,
    Quality,
    Cast,
    Temporal,
}

/// The seven tracked metrics, in scoring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    VoteAverage,
    VoteCount,
    Popularity,
    Revenue,
    RuntimeQuality,
    ReleaseRecency,
    CastStarPower,
}

impl Feature {
    /// Every feature in the order the engine computes them.
    pub const ALL: [Feature; 7] = [
        Feature::VoteAverage,
        Feature::VoteCount,
        Feature::Popularity,
        Feature::Revenue,
        Feature::RuntimeQuality,
        Feature::ReleaseRecency,
        Feature::CastStarPower,
    ];

    /// Machine name, matching the weight configuration keys.
    pub fn name(self) -> &'static str {
        match self {
            Feature::VoteAverage => "vote_average",
            Feature::VoteCount => "vote_count",
            Feature::Popularity => "popularity",
            Feature::Revenue => "revenue",
            Feature::RuntimeQuality => "runtime_quality",
            Feature::ReleaseRecency => "release_recency",
            Feature::CastStarPower => "cast_star_power",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Feature::VoteAverage => "User Rating",
            Feature::VoteCount => "Rating Confidence",
            Feature::Popularity => "Popularity",
            Feature::Revenue => "Box Office",
            Feature::RuntimeQuality => "Runtime Quality",
            Feature::ReleaseRecency => "Era Score",
            Feature::CastStarPower => "Star Power",
        }
    }

    pub fn category(self) -> ScoreCategory {
        match self {
            Feature::VoteAverage | Feature::VoteCount => ScoreCategory::Ratings,
            Feature::Popularity => ScoreCategory::Popularity,
            Feature::Revenue => ScoreCategory::Financial,
            Feature::RuntimeQuality => ScoreCategory::Quality,
            Feature::ReleaseRecency => ScoreCategory::Temporal,
            Feature::CastStarPower => ScoreCategory::Cast,
        }
    }

    pub fn from_name(name: &str) -> Option<Feature> {
        Feature::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Letter grade derived from a total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C-")]
    CMinus,
    #[serde(rename = "D+")]
    DPlus,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "D-")]
    DMinus,
    #[serde(rename = "F")]
    F,
}

impl Grade {
    pub fn as_str(self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::BMinus => "B-",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::CMinus => "C-",
            Grade::DPlus => "D+",
            Grade::D => "D",
            Grade::DMinus => "D-",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much the rating data can be trusted, from vote volume and popularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataConfidence {
    VeryHigh,
    High,
    Medium,
    Low,
    VeryLow,
}

impl fmt::Display for DataConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DataConfidence::VeryHigh => "very high",
            DataConfidence::High => "high",
            DataConfidence::Medium => "medium",
            DataConfidence::Low => "low",
            DataConfidence::VeryLow => "very low",
        };
        f.write_str(label)
    }
}

/// Individual feature score with explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureScore {
    #[serde(rename = "name")]
    pub feature: Feature,
    pub display_name: String,
    pub raw_value: f64,
    /// 0-100 scale
    pub normalized_value: f64,
    pub weight: f64,
    pub weighted_score: f64,
    pub category: ScoreCategory,
    pub explanation: String,
}

/// Complete score breakdown for a movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub movie_id: i64,
    pub movie_title: String,
    /// 0-100 scale
    pub total_score: f64,
    pub grade: Grade,
    pub features: Vec<FeatureScore>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub summary: String,
    pub data_confidence: DataConfidence,
}

impl ScoreBreakdown {
    pub fn feature(&self, feature: Feature) -> Option<&FeatureScore> {
        self.features.iter().find(|f| f.feature == feature)
    }
}
