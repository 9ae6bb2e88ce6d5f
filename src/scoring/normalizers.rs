//! Normalization curves mapping raw movie metrics onto a common 0-100 scale.
//!
//! Every function here is total and deterministic: inputs outside the
//! expected range are clamped or mapped to a documented neutral value, never
//! rejected.

use crate::config::RecencyMode;
use crate::core::{DataConfidence, Grade};

/// Vote count treated as the saturation point (blockbuster territory).
pub const MAX_VOTE_COUNT: f64 = 30_000.0;
/// Popularity treated as the saturation point.
pub const MAX_POPULARITY: f64 = 500.0;
/// Roughly the highest worldwide gross on record.
pub const MAX_REVENUE: f64 = 3_000_000_000.0;
pub const OPTIMAL_RUNTIME_MIN: u32 = 90;
pub const OPTIMAL_RUNTIME_MAX: u32 = 150;

/// Score for unknown runtime or release date.
pub const NEUTRAL_SCORE: f64 = 50.0;
/// Score for unknown box office.
pub const UNKNOWN_REVENUE_SCORE: f64 = 25.0;
/// Score for an empty cast list.
pub const UNKNOWN_CAST_SCORE: f64 = 30.0;

/// Billing-position weights for star power; positions past the table get 0.01.
const CAST_POSITION_WEIGHTS: [f64; 8] = [0.35, 0.25, 0.15, 0.10, 0.05, 0.05, 0.03, 0.02];
const CAST_TAIL_WEIGHT: f64 = 0.01;

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `log10(value + 1) / log10(max + 1) * 100`
fn log_scale(value: f64, max: f64) -> f64 {
    (value + 1.0).log10() / (max + 1.0).log10() * 100.0
}

/// Average rating (0-10) to 0-100, with a bonus of up to 9 points above 7.
pub fn normalize_vote_average(vote_average: f64) -> f64 {
    if vote_average.is_nan() || vote_average <= 0.0 {
        return 0.0;
    }

    let rating = vote_average.min(10.0);
    let mut score = rating * 10.0;
    if rating > 7.0 {
        score = (score + (rating - 7.0) * 3.0).min(100.0);
    }

    round2(score)
}

/// Vote count on a log curve; 30k votes saturates.
pub fn normalize_vote_count(vote_count: u64) -> f64 {
    if vote_count == 0 {
        return 0.0;
    }

    let normalized = log_scale(vote_count as f64, MAX_VOTE_COUNT);
    round2((normalized * 1.1).min(100.0))
}

/// Popularity on a log curve; 500 saturates.
pub fn normalize_popularity(popularity: f64) -> f64 {
    if popularity.is_nan() || popularity <= 0.0 {
        return 0.0;
    }

    round2(log_scale(popularity, MAX_POPULARITY).min(100.0))
}

/// Map a return on investment (as a ratio, 1.0 = 100%) to 0-100.
///
/// ROI 0 scores 40, ROI 5 (500%) or more scores 100, losses fall toward 0.
pub fn roi_score(roi: f64) -> f64 {
    if roi >= 5.0 {
        100.0
    } else if roi >= 0.0 {
        40.0 + (roi / 5.0) * 60.0
    } else {
        (40.0 + roi * 40.0).max(0.0)
    }
}

/// Box office combining absolute gross (60%) and ROI (40%) when the budget is known.
pub fn normalize_revenue(revenue: u64, budget: u64) -> f64 {
    if revenue == 0 {
        return UNKNOWN_REVENUE_SCORE;
    }

    let absolute = log_scale(revenue as f64, MAX_REVENUE);

    let combined = if budget > 0 {
        let roi = (revenue as f64 - budget as f64) / budget as f64;
        absolute * 0.6 + roi_score(roi) * 0.4
    } else {
        absolute
    };

    round2(combined.min(100.0))
}

/// Runtime sweet spot is 90-150 minutes; unknown runtime is neutral.
pub fn normalize_runtime(runtime: Option<u32>) -> f64 {
    match runtime {
        None | Some(0) => NEUTRAL_SCORE,
        Some(r) if (OPTIMAL_RUNTIME_MIN..=OPTIMAL_RUNTIME_MAX).contains(&r) => 100.0,
        Some(r) if r < OPTIMAL_RUNTIME_MIN => {
            let min = OPTIMAL_RUNTIME_MIN as f64;
            let penalty = (min - r as f64) / min * 50.0;
            (100.0 - penalty).max(30.0)
        }
        Some(r) => {
            // 30 points per extra hour
            let penalty = (r - OPTIMAL_RUNTIME_MAX) as f64 / 60.0 * 30.0;
            (100.0 - penalty).max(30.0)
        }
    }
}

/// Release-era score for a movie released in `year`, seen from `reference_year`.
pub fn normalize_release_recency(year: Option<i32>, reference_year: i32, mode: RecencyMode) -> f64 {
    let Some(year) = year else {
        return NEUTRAL_SCORE;
    };
    let age = reference_year - year;

    match mode {
        RecencyMode::Neutral => {
            if age >= 20 {
                75.0
            } else if age >= 10 {
                65.0
            } else if age <= 2 {
                60.0
            } else {
                70.0
            }
        }
        RecencyMode::FavorRecent => {
            if age <= 2 {
                100.0
            } else if age <= 5 {
                90.0
            } else if age <= 10 {
                75.0
            } else if age <= 20 {
                60.0
            } else {
                (60.0 - (age - 20) as f64 * 0.5).max(30.0)
            }
        }
    }
}

/// Weight for the cast member billed at `position` (0-based).
pub fn cast_position_weight(position: usize) -> f64 {
    CAST_POSITION_WEIGHTS
        .get(position)
        .copied()
        .unwrap_or(CAST_TAIL_WEIGHT)
}

/// Star power from cast popularities in billing order.
///
/// Top-billed actors dominate; the weighted average is scaled by 1.2.
pub fn normalize_cast_star_power(cast_popularities: &[f64]) -> f64 {
    if cast_popularities.is_empty() {
        return UNKNOWN_CAST_SCORE;
    }

    let (weighted_sum, total_weight) = cast_popularities.iter().enumerate().fold(
        (0.0, 0.0),
        |(sum, total), (position, &popularity)| {
            let weight = cast_position_weight(position);
            let normalized = if popularity > 0.0 {
                ((popularity + 1.0).log10() * 50.0).min(100.0)
            } else {
                0.0
            };
            (sum + normalized * weight, total + weight)
        },
    );

    let score = if total_weight > 0.0 {
        weighted_sum / total_weight
    } else {
        0.0
    };

    round2((score * 1.2).min(100.0))
}

/// Confidence in the rating data given vote volume and popularity.
pub fn data_confidence(vote_count: u64, popularity: f64) -> DataConfidence {
    if vote_count >= 10_000 && popularity >= 50.0 {
        DataConfidence::VeryHigh
    } else if vote_count >= 5_000 && popularity >= 20.0 {
        DataConfidence::High
    } else if vote_count >= 1_000 && popularity >= 10.0 {
        DataConfidence::Medium
    } else if vote_count >= 100 {
        DataConfidence::Low
    } else {
        DataConfidence::VeryLow
    }
}

/// Convert a total score to a letter grade. Boundaries belong to the higher grade.
pub fn score_to_grade(score: f64) -> Grade {
    const LADDER: [(f64, Grade); 12] = [
        (95.0, Grade::APlus),
        (90.0, Grade::A),
        (85.0, Grade::AMinus),
        (80.0, Grade::BPlus),
        (75.0, Grade::B),
        (70.0, Grade::BMinus),
        (65.0, Grade::CPlus),
        (60.0, Grade::C),
        (55.0, Grade::CMinus),
        (50.0, Grade::DPlus),
        (45.0, Grade::D),
        (40.0, Grade::DMinus),
    ];

    LADDER
        .iter()
        .find(|(threshold, _)| score >= *threshold)
        .map(|(_, grade)| *grade)
        .unwrap_or(Grade::F)
}
