use serde::{Deserialize, Serialize};

use crate::config::{EraStats, ReferenceTables};
use crate::core::{MovieRecord, ScoreBreakdown};
use crate::scoring::normalizers::round1;

/// Statistics assumed for a decade missing from the reference tables.
pub const DEFAULT_ERA_STATS: EraStats = EraStats {
    mean: 65.0,
    std: 10.0,
};

/// Where a movie stands among releases from its decade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EraComparison {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    pub era: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub era_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movie_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub era_average: Option<f64>,
    pub era_percentile: f64,
    pub explanation: String,
}

/// Era label and year range for a release year.
pub fn era_label(year: i32) -> (&'static str, &'static str) {
    match year {
        y if y >= 2020 => ("2020s", "2020-present"),
        y if y >= 2010 => ("2010s", "2010-2019"),
        y if y >= 2000 => ("2000s", "2000-2009"),
        y if y >= 1990 => ("1990s", "1990-1999"),
        y if y >= 1980 => ("1980s", "1980-1989"),
        _ => ("Classic", "Pre-1980"),
    }
}

/// First year of the decade containing `year`.
pub fn decade_start(year: i32) -> i32 {
    year.div_euclid(10) * 10
}

/// Standard normal CDF as a percentile.
pub fn z_to_percentile(z: f64) -> f64 {
    50.0 * (1.0 + libm::erf(z / std::f64::consts::SQRT_2))
}

pub fn era_comparison(
    movie: &MovieRecord,
    breakdown: &ScoreBreakdown,
    reference: &ReferenceTables,
) -> EraComparison {
    let Some(year) = movie.year() else {
        return EraComparison {
            year: None,
            era: "Unknown".to_string(),
            era_range: None,
            movie_score: None,
            era_average: None,
            era_percentile: 50.0,
            explanation: "Release year unknown".to_string(),
        };
    };

    let (era, range) = era_label(year);
    let stats = reference
        .era(decade_start(year))
        .unwrap_or(DEFAULT_ERA_STATS);

    let z = if stats.std > 0.0 {
        (breakdown.total_score - stats.mean) / stats.std
    } else {
        0.0
    };
    let percentile = z_to_percentile(z);

    EraComparison {
        year: Some(year),
        era: era.to_string(),
        era_range: Some(range.to_string()),
        movie_score: Some(breakdown.total_score),
        era_average: Some(stats.mean),
        era_percentile: round1(percentile),
        explanation: explain_era_comparison(&movie.title, era, percentile),
    }
}

fn explain_era_comparison(title: &str, era: &str, percentile: f64) -> String {
    if percentile >= 90.0 {
        format!("{title} is among the top 10% of {era} films")
    } else if percentile >= 75.0 {
        format!("{title} ranks in the top quarter of {era} films")
    } else if percentile >= 50.0 {
        format!("{title} is above average for {era} films")
    } else if percentile >= 25.0 {
        format!("{title} is below average for {era} films")
    } else {
        format!("{title} ranks in the bottom quarter of {era} films")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DataConfidence, Grade};

    fn breakdown(total: f64) -> ScoreBreakdown {
        ScoreBreakdown {
            movie_id: 1,
            movie_title: "Test".into(),
            total_score: total,
            grade: Grade::C,
            features: vec![],
            strengths: vec![],
            weaknesses: vec![],
            summary: String::new(),
            data_confidence: DataConfidence::Low,
        }
    }

    fn released(date: &str) -> MovieRecord {
        let mut movie = MovieRecord::new(1, "Test");
        movie.release_date = Some(date.to_string());
        movie
    }

    #[test]
    fn test_era_labels() {
        assert_eq!(era_label(2024).0, "2020s");
        assert_eq!(era_label(2010).0, "2010s");
        assert_eq!(era_label(1985).1, "1980-1989");
        assert_eq!(era_label(1979), ("Classic", "Pre-1980"));
    }

    #[test]
    fn test_percentile_at_mean_is_fifty() {
        assert!((z_to_percentile(0.0) - 50.0).abs() < 1e-12);
        assert!((z_to_percentile(1.0) - 84.134).abs() < 1e-3);
    }

    #[test]
    fn test_score_at_decade_mean() {
        // 1990s: mean 66, std 10
        let result = era_comparison(&released("1994-09-23"), &breakdown(66.0), &ReferenceTables::default());
        assert_eq!(result.era, "1990s");
        assert_eq!(result.era_percentile, 50.0);
        assert_eq!(result.era_average, Some(66.0));
        assert_eq!(result.explanation, "Test is above average for 1990s films");
    }

    #[test]
    fn test_missing_decade_uses_defaults() {
        // 1950s absent: mean 65, std 10 -> z = 2
        let result = era_comparison(&released("1957"), &breakdown(85.0), &ReferenceTables::default());
        assert_eq!(result.era, "Classic");
        assert_eq!(result.era_percentile, 97.7);
        assert_eq!(result.explanation, "Test is among the top 10% of Classic films");
    }

    #[test]
    fn test_zero_std_is_neutral() {
        let mut reference = ReferenceTables::default();
        reference
            .era_stats
            .insert("2000".to_string(), EraStats { mean: 60.0, std: 0.0 });
        let result = era_comparison(&released("2004-01-01"), &breakdown(90.0), &reference);
        assert_eq!(result.era_percentile, 50.0);
    }

    #[test]
    fn test_unknown_year() {
        let result = era_comparison(&MovieRecord::new(1, "Test"), &breakdown(70.0), &ReferenceTables::default());
        assert_eq!(result.era, "Unknown");
        assert_eq!(result.era_percentile, 50.0);
        assert_eq!(result.explanation, "Release year unknown");
    }
}
