//! Scoring configuration for movie quality scores
//!
//! This module contains:
//! - The seven feature weights and their renormalization
//! - The release-recency mode and reference year used by the engine

use crate::core::refined::WeightFactor;
use crate::core::Feature;
use crate::errors::{CinescoreError, Result};
use serde::{Deserialize, Serialize};

/// Scoring weights configuration
///
/// Each weight is constrained to [0.0, 1.0]. Weights are renormalized to sum
/// to exactly 1.0 before every scoring call; see [`WeightConfig::normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightConfig {
    /// Weight for the average user rating (0.0-1.0)
    #[serde(default = "default_vote_average_weight", alias = "rating")]
    pub vote_average: f64,

    /// Weight for vote-count confidence (0.0-1.0)
    #[serde(default = "default_vote_count_weight")]
    pub vote_count: f64,

    /// Weight for popularity (0.0-1.0)
    #[serde(default = "default_popularity_weight")]
    pub popularity: f64,

    /// Weight for box office / ROI (0.0-1.0)
    #[serde(default = "default_revenue_weight")]
    pub revenue: f64,

    /// Weight for runtime quality (0.0-1.0)
    #[serde(default = "default_runtime_quality_weight")]
    pub runtime_quality: f64,

    /// Weight for release recency (0.0-1.0)
    #[serde(default = "default_release_recency_weight")]
    pub release_recency: f64,

    /// Weight for cast star power (0.0-1.0)
    #[serde(default = "default_cast_star_power_weight")]
    pub cast_star_power: f64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

/// Built-in weight distribution, also the fallback for an all-zero config.
pub const DEFAULT_WEIGHTS: WeightConfig = WeightConfig {
    vote_average: 0.25,
    vote_count: 0.15,
    popularity: 0.20,
    revenue: 0.10,
    runtime_quality: 0.05,
    release_recency: 0.10,
    cast_star_power: 0.15,
};

impl WeightConfig {
    /// Build a weight configuration, rejecting any weight outside [0.0, 1.0].
    pub fn new(
        vote_average: f64,
        vote_count: f64,
        popularity: f64,
        revenue: f64,
        runtime_quality: f64,
        release_recency: f64,
        cast_star_power: f64,
    ) -> Result<Self> {
        let config = Self {
            vote_average,
            vote_count,
            popularity,
            revenue,
            runtime_quality,
            release_recency,
            cast_star_power,
        };
        config.validate()?;
        Ok(config)
    }

    // Pure function: Validate a single weight with name
    pub fn validate_weight(weight: f64, name: &str) -> Result<WeightFactor> {
        WeightFactor::new(weight).map_err(|_| CinescoreError::invalid_weight(name, weight))
    }

    // Pure function: Collect all weight validations
    pub fn collect_weight_validations(&self) -> Vec<Result<WeightFactor>> {
        Feature::ALL
            .iter()
            .map(|&feature| Self::validate_weight(self.weight_for(feature), feature.name()))
            .collect()
    }

    /// Validate that every weight is in [0.0, 1.0]
    pub fn validate(&self) -> Result<()> {
        for validation in self.collect_weight_validations() {
            validation?;
        }
        Ok(())
    }

    pub fn sum(&self) -> f64 {
        self.vote_average
            + self.vote_count
            + self.popularity
            + self.revenue
            + self.runtime_quality
            + self.release_recency
            + self.cast_star_power
    }

    /// Renormalize weights so they sum to 1.0.
    ///
    /// Each weight is first clamped into [0.0, 1.0] (non-finite values count
    /// as zero), since the fields are public and may bypass [`Self::new`].
    /// An all-zero configuration falls back to [`DEFAULT_WEIGHTS`], which is
    /// renormalized the same way, so the fallback and an explicit default
    /// configuration always score identically.
    pub fn normalize(&self) -> WeightConfig {
        let clamped = self.clamped();
        let source = if clamped.sum() > 0.0 {
            clamped
        } else {
            DEFAULT_WEIGHTS
        };
        let total = source.sum();

        WeightConfig {
            vote_average: source.vote_average / total,
            vote_count: source.vote_count / total,
            popularity: source.popularity / total,
            revenue: source.revenue / total,
            runtime_quality: source.runtime_quality / total,
            release_recency: source.release_recency / total,
            cast_star_power: source.cast_star_power / total,
        }
    }

    fn clamped(&self) -> WeightConfig {
        fn clamp(weight: f64) -> f64 {
            if weight.is_finite() {
                weight.clamp(0.0, 1.0)
            } else {
                0.0
            }
        }

        WeightConfig {
            vote_average: clamp(self.vote_average),
            vote_count: clamp(self.vote_count),
            popularity: clamp(self.popularity),
            revenue: clamp(self.revenue),
            runtime_quality: clamp(self.runtime_quality),
            release_recency: clamp(self.release_recency),
            cast_star_power: clamp(self.cast_star_power),
        }
    }

    pub fn weight_for(&self, feature: Feature) -> f64 {
        match feature {
            Feature::VoteAverage => self.vote_average,
            Feature::VoteCount => self.vote_count,
            Feature::Popularity => self.popularity,
            Feature::Revenue => self.revenue,
            Feature::RuntimeQuality => self.runtime_quality,
            Feature::ReleaseRecency => self.release_recency,
            Feature::CastStarPower => self.cast_star_power,
        }
    }

    /// Set a single weight by feature, validating its range.
    pub fn with_weight(mut self, feature: Feature, weight: f64) -> Result<Self> {
        let weight = Self::validate_weight(weight, feature.name())?.into_inner();
        let slot = match feature {
            Feature::VoteAverage => &mut self.vote_average,
            Feature::VoteCount => &mut self.vote_count,
            Feature::Popularity => &mut self.popularity,
            Feature::Revenue => &mut self.revenue,
            Feature::RuntimeQuality => &mut self.runtime_quality,
            Feature::ReleaseRecency => &mut self.release_recency,
            Feature::CastStarPower => &mut self.cast_star_power,
        };
        *slot = weight;
        Ok(self)
    }

    /// Parse `name=value` overrides (e.g. `popularity=0.4,revenue=0`) on top of `self`.
    pub fn with_overrides(self, overrides: &[String]) -> Result<Self> {
        overrides.iter().try_fold(self, |config, entry| {
            let (name, value) = entry.split_once('=').ok_or_else(|| {
                CinescoreError::validation(format!(
                    "weight override '{}' must look like name=value",
                    entry
                ))
            })?;
            let feature = Feature::from_name(name.trim()).ok_or_else(|| {
                CinescoreError::validation(format!("unknown weight '{}'", name.trim()))
            })?;
            let value: f64 = value.trim().parse().map_err(|_| {
                CinescoreError::validation(format!("weight '{}' is not a number", value.trim()))
            })?;
            config.with_weight(feature, value)
        })
    }
}

// Default weights - rating and popularity dominate, runtime is a tiebreaker
pub fn default_vote_average_weight() -> f64 {
    DEFAULT_WEIGHTS.vote_average
}
pub fn default_vote_count_weight() -> f64 {
    DEFAULT_WEIGHTS.vote_count
}
pub fn default_popularity_weight() -> f64 {
    DEFAULT_WEIGHTS.popularity
}
pub fn default_revenue_weight() -> f64 {
    DEFAULT_WEIGHTS.revenue
}
pub fn default_runtime_quality_weight() -> f64 {
    DEFAULT_WEIGHTS.runtime_quality
}
pub fn default_release_recency_weight() -> f64 {
    DEFAULT_WEIGHTS.release_recency
}
pub fn default_cast_star_power_weight() -> f64 {
    DEFAULT_WEIGHTS.cast_star_power
}

/// How release recency is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecencyMode {
    /// Classics are not penalized; established films get a slight boost.
    #[default]
    Neutral,
    /// Newer releases score higher.
    FavorRecent,
}

/// Engine-level scoring options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoringOptions {
    #[serde(default)]
    pub recency_mode: RecencyMode,

    /// Year ages are measured from. Defaults to the current calendar year.
    #[serde(default)]
    pub reference_year: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        assert!((WeightConfig::default().sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(WeightConfig::new(0.2, 0.2, 0.2, 0.2, 0.2, 0.2, 1.2).is_err());
        assert!(WeightConfig::new(-0.1, 0.2, 0.2, 0.2, 0.2, 0.2, 0.2).is_err());
        assert!(WeightConfig::new(1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0).is_ok());
    }

    #[test]
    fn test_normalize_sums_to_one() {
        let weights = WeightConfig::new(1.0, 1.0, 0.5, 0.0, 0.0, 0.25, 0.25).unwrap();
        let normalized = weights.normalize();
        assert!((normalized.sum() - 1.0).abs() < 1e-9);
        assert!((normalized.vote_average - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!(normalized.revenue, 0.0);
    }

    #[test]
    fn test_all_zero_falls_back_to_defaults() {
        let zero = WeightConfig::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0).unwrap();
        assert_eq!(zero.normalize(), DEFAULT_WEIGHTS.normalize());
    }

    #[test]
    fn test_normalize_clamps_weights_set_directly() {
        let weights = WeightConfig {
            vote_count: -1.0,
            popularity: 3.0,
            revenue: f64::NAN,
            ..DEFAULT_WEIGHTS
        };
        let normalized = weights.normalize();

        assert_eq!(normalized.vote_count, 0.0);
        assert_eq!(normalized.revenue, 0.0);
        assert!((normalized.sum() - 1.0).abs() < 1e-9);
        for feature in Feature::ALL {
            let weight = normalized.weight_for(feature);
            assert!((0.0..=1.0).contains(&weight), "{feature}: {weight}");
        }
    }

    #[test]
    fn test_all_negative_falls_back_to_defaults() {
        let weights = WeightConfig {
            vote_average: -0.5,
            vote_count: -0.5,
            popularity: -0.5,
            revenue: -0.5,
            runtime_quality: -0.5,
            release_recency: -0.5,
            cast_star_power: -0.5,
        };
        assert_eq!(weights.normalize(), DEFAULT_WEIGHTS.normalize());
    }

    #[test]
    fn test_overrides() {
        let weights = WeightConfig::default()
            .with_overrides(&["popularity=0.5".to_string(), " revenue = 0 ".to_string()])
            .unwrap();
        assert_eq!(weights.popularity, 0.5);
        assert_eq!(weights.revenue, 0.0);

        assert!(WeightConfig::default()
            .with_overrides(&["budget=0.5".to_string()])
            .is_err());
        assert!(WeightConfig::default()
            .with_overrides(&["popularity=2".to_string()])
            .is_err());
        assert!(WeightConfig::default()
            .with_overrides(&["popularity".to_string()])
            .is_err());
    }

    #[test]
    fn test_deserialize_partial_uses_defaults() {
        let weights: WeightConfig = toml::from_str("rating = 0.5").unwrap();
        assert_eq!(weights.vote_average, 0.5);
        assert_eq!(weights.popularity, 0.20);
    }
}
