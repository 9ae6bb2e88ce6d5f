use serde::{Deserialize, Serialize};

use crate::config::ReferenceTables;
use crate::core::{MovieRecord, ScoreBreakdown};
use crate::scoring::normalizers::round2;

/// Baseline used when none of the movie's genres has a reference entry.
pub const DEFAULT_GENRE_BASELINE: f64 = 65.0;

/// Total score re-centred on what is typical for the movie's genres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreAdjustedScore {
    pub raw_score: f64,
    pub adjusted_score: f64,
    /// Raw score minus the genre baseline
    pub adjustment: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre_baseline: Option<f64>,
    pub genres: Vec<String>,
    pub explanation: String,
}

/// Mean baseline over the movie's genres that have a reference entry.
pub fn genre_baseline(genres: &[String], reference: &ReferenceTables) -> f64 {
    let known: Vec<f64> = genres
        .iter()
        .filter_map(|g| reference.genre_baseline(g))
        .collect();

    if known.is_empty() {
        DEFAULT_GENRE_BASELINE
    } else {
        known.iter().sum::<f64>() / known.len() as f64
    }
}

pub fn genre_adjusted_score(
    movie: &MovieRecord,
    breakdown: &ScoreBreakdown,
    reference: &ReferenceTables,
) -> GenreAdjustedScore {
    let raw_score = breakdown.total_score;

    if movie.genres.is_empty() {
        return GenreAdjustedScore {
            raw_score,
            adjusted_score: raw_score,
            adjustment: 0.0,
            genre_baseline: None,
            genres: Vec::new(),
            explanation: "No genre information available".to_string(),
        };
    }

    let baseline = genre_baseline(&movie.genres, reference);
    let adjustment = raw_score - baseline;
    // 60 is par; each point above or below the genre norm counts 1.2
    let adjusted = (60.0 + adjustment * 1.2).clamp(0.0, 100.0);

    GenreAdjustedScore {
        raw_score,
        adjusted_score: round2(adjusted),
        adjustment: round2(adjustment),
        genre_baseline: Some(round2(baseline)),
        genres: movie.genres.clone(),
        explanation: explain_genre_adjustment(&movie.title, adjustment, &movie.genres),
    }
}

fn explain_genre_adjustment(title: &str, adjustment: f64, genres: &[String]) -> String {
    let genre_list = genres
        .iter()
        .take(2)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    let standing = if adjustment > 10.0 {
        "significantly above average"
    } else if adjustment > 5.0 {
        "above average"
    } else if adjustment > -5.0 {
        "about average"
    } else if adjustment > -10.0 {
        "below average"
    } else {
        "significantly below average"
    };

    format!("{title} scores {standing} for {genre_list} films")
}
