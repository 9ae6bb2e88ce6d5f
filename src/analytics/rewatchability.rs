use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::MovieRecord;
use crate::scoring::normalizers::{normalize_popularity, normalize_vote_average, round2};

/// Runtime assumed when none is recorded.
const ASSUMED_RUNTIME: u32 = 120;
const DEFAULT_GENRE_REWATCH: f64 = 70.0;

const GENRE_REWATCH_SCORES: [(&str, f64); 8] = [
    ("Comedy", 90.0),
    ("Action", 85.0),
    ("Animation", 90.0),
    ("Adventure", 85.0),
    ("Science Fiction", 80.0),
    ("Fantasy", 85.0),
    ("Family", 90.0),
    ("Musical", 85.0),
];

const RUNTIME_WEIGHT: f64 = 0.15;
const GENRE_WEIGHT: f64 = 0.30;
const POPULARITY_WEIGHT: f64 = 0.25;
const RATING_WEIGHT: f64 = 0.30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewatchCategory {
    HighlyRewatchable,
    Rewatchable,
    OneTimeWatch,
    SkipRewatch,
}

impl RewatchCategory {
    pub fn from_score(score: f64) -> Self {
        if score >= 85.0 {
            RewatchCategory::HighlyRewatchable
        } else if score >= 70.0 {
            RewatchCategory::Rewatchable
        } else if score >= 55.0 {
            RewatchCategory::OneTimeWatch
        } else {
            RewatchCategory::SkipRewatch
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            RewatchCategory::HighlyRewatchable => "A film you'll want to watch again and again",
            RewatchCategory::Rewatchable => "Worth revisiting occasionally",
            RewatchCategory::OneTimeWatch => "Enjoyable but probably a one-time experience",
            RewatchCategory::SkipRewatch => "Better to spend time on other films",
        }
    }
}

impl fmt::Display for RewatchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RewatchCategory::HighlyRewatchable => "highly rewatchable",
            RewatchCategory::Rewatchable => "rewatchable",
            RewatchCategory::OneTimeWatch => "one-time watch",
            RewatchCategory::SkipRewatch => "skip rewatch",
        };
        f.write_str(label)
    }
}

/// Individual factor scores, each on 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RewatchFactors {
    pub runtime: f64,
    pub genre: f64,
    pub popularity: f64,
    pub rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rewatchability {
    pub score: f64,
    pub category: RewatchCategory,
    pub description: String,
    pub factors: RewatchFactors,
}

/// Medium-length films get rewatched most.
pub fn runtime_rewatch_factor(runtime: Option<u32>) -> f64 {
    match runtime.filter(|&r| r > 0).unwrap_or(ASSUMED_RUNTIME) {
        90..=130 => 100.0,
        80..=150 => 80.0,
        _ => 60.0,
    }
}

/// Mean per-genre rewatch score; unlisted genres count as 70.
pub fn genre_rewatch_factor(genres: &[String]) -> f64 {
    if genres.is_empty() {
        return DEFAULT_GENRE_REWATCH;
    }

    let total: f64 = genres
        .iter()
        .map(|genre| {
            GENRE_REWATCH_SCORES
                .iter()
                .find(|(name, _)| name == genre)
                .map_or(DEFAULT_GENRE_REWATCH, |(_, score)| *score)
        })
        .sum();

    total / genres.len() as f64
}

pub fn calculate_rewatchability(movie: &MovieRecord) -> Rewatchability {
    let factors = RewatchFactors {
        runtime: runtime_rewatch_factor(movie.runtime),
        genre: genre_rewatch_factor(&movie.genres),
        popularity: normalize_popularity(movie.popularity),
        rating: normalize_vote_average(movie.vote_average),
    };

    let score = factors.runtime * RUNTIME_WEIGHT
        + factors.genre * GENRE_WEIGHT
        + factors.popularity * POPULARITY_WEIGHT
        + factors.rating * RATING_WEIGHT;
    let category = RewatchCategory::from_score(score);

    Rewatchability {
        score: round2(score),
        category,
        description: category.description().to_string(),
        factors: RewatchFactors {
            runtime: round2(factors.runtime),
            genre: round2(factors.genre),
            popularity: round2(factors.popularity),
            rating: round2(factors.rating),
        },
    }
}
