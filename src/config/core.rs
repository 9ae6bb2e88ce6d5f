use serde::{Deserialize, Serialize};

use super::reference::ReferenceTables;
use super::scoring::{ScoringOptions, WeightConfig};

/// Root configuration structure for cinescore
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CinescoreConfig {
    /// Feature weights
    #[serde(default)]
    pub weights: Option<WeightConfig>,

    /// Recency mode and reference year
    #[serde(default)]
    pub scoring: ScoringOptions,

    /// Genre baselines and era statistics for analytics
    #[serde(default)]
    pub reference: ReferenceTables,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

impl CinescoreConfig {
    /// Effective weights (defaults when the section is absent).
    pub fn weights(&self) -> WeightConfig {
        self.weights.unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// One of "terminal", "json" or "markdown"
    pub default_format: Option<String>,
}

/// Commented template written by `cinescore init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Cinescore Configuration

# Feature weights. Each must be within [0, 1]; they are renormalized to sum
# to 1 before scoring. All zeros falls back to these defaults.
[weights]
vote_average = 0.25
vote_count = 0.15
popularity = 0.20
revenue = 0.10
runtime_quality = 0.05
release_recency = 0.10
cast_star_power = 0.15

[scoring]
# "neutral" keeps classics competitive, "favor_recent" rewards new releases
recency_mode = "neutral"
# reference_year = 2025

[reference.genre_baselines]
Documentary = 72
Drama = 68
Animation = 70
Adventure = 65
Comedy = 62
Action = 63
Horror = 58
Thriller = 64
"Science Fiction" = 65
Fantasy = 66
Romance = 63
Crime = 67
Mystery = 66
Family = 64
War = 69
History = 70
Music = 68
Western = 65

[reference.era_stats]
"2020" = { mean = 64, std = 12 }
"2010" = { mean = 65, std = 11 }
"2000" = { mean = 63, std = 12 }
"1990" = { mean = 66, std = 10 }
"1980" = { mean = 64, std = 11 }

[output]
default_format = "terminal"
"#;
