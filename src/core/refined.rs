//! Refined types for domain invariants
//!
//! Weights and raw movie metrics are validated once at the boundary (when a
//! configuration file or movie record is loaded) and then travel through the
//! scoring core as plain values that are known to be in range.
//!
//! # Available Types
//!
//! - [`WeightFactor`]: Scoring weight in unit interval (0.0-1.0)
//!
//! # Example
//!
//! ```
//! use cinescore::core::refined::WeightFactor;
//!
//! let weight = WeightFactor::new(0.25).unwrap();
//! assert_eq!(weight.get(), 0.25);
//! assert!(WeightFactor::new(1.5).is_err());
//! ```

use serde::{Deserialize, Serialize};
use stillwater::refined::Predicate;

// ============================================================================
// Custom Predicates
// ============================================================================

/// Predicate for floating-point values in the unit interval [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitInterval;

impl Predicate<f64> for UnitInterval {
    type Error = &'static str;

    fn check(value: &f64) -> Result<(), Self::Error> {
        if *value >= 0.0 && *value <= 1.0 {
            Ok(())
        } else {
            Err("value must be in range [0.0, 1.0]")
        }
    }
}

/// Predicate for finite, non-negative f64 values (>= 0.0).
///
/// Used for popularity figures and other unbounded metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonNegativeF64;

impl Predicate<f64> for NonNegativeF64 {
    type Error = &'static str;

    fn check(value: &f64) -> Result<(), Self::Error> {
        if value.is_finite() && *value >= 0.0 {
            Ok(())
        } else {
            Err("value must be finite and non-negative (>= 0.0)")
        }
    }
}

/// Predicate for average ratings on the 0-10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingScale;

impl Predicate<f64> for RatingScale {
    type Error = &'static str;

    fn check(value: &f64) -> Result<(), Self::Error> {
        if value.is_finite() && (0.0..=10.0).contains(value) {
            Ok(())
        } else {
            Err("rating must be in range [0.0, 10.0]")
        }
    }
}

// ============================================================================
// Weight Types
// ============================================================================

/// Weight factor for scoring calculations.
///
/// Valid range: [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightFactor(f64);

impl WeightFactor {
    /// Create a new weight factor, validating it's in [0.0, 1.0].
    pub fn new(value: f64) -> Result<Self, &'static str> {
        UnitInterval::check(&value)?;
        Ok(Self(value))
    }

    /// Get the inner value.
    pub fn into_inner(self) -> f64 {
        self.0
    }

    /// Get the inner value by reference.
    pub fn get(&self) -> f64 {
        self.0
    }
}

impl std::ops::Deref for WeightFactor {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Default for WeightFactor {
    fn default() -> Self {
        Self(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_factor_bounds() {
        assert!(WeightFactor::new(0.0).is_ok());
        assert!(WeightFactor::new(1.0).is_ok());
        assert!(WeightFactor::new(-0.01).is_err());
        assert!(WeightFactor::new(1.01).is_err());
        assert!(WeightFactor::new(f64::NAN).is_err());
    }

    #[test]
    fn test_weight_factor_deref() {
        let w = WeightFactor::new(0.4).unwrap();
        assert_eq!(*w * 2.0, 0.8);
        assert_eq!(w.into_inner(), 0.4);
    }

    #[test]
    fn test_non_negative_rejects_infinity() {
        assert!(NonNegativeF64::check(&0.0).is_ok());
        assert!(NonNegativeF64::check(&f64::INFINITY).is_err());
        assert!(NonNegativeF64::check(&-1.0).is_err());
    }

    #[test]
    fn test_rating_scale() {
        assert!(RatingScale::check(&10.0).is_ok());
        assert!(RatingScale::check(&10.5).is_err());
    }
}
