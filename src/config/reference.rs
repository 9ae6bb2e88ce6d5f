//! Reference tables for the analytics extensions.
//!
//! Genre baselines and per-decade score statistics are supplied by the caller.
//! The defaults here are the tables the hosted service ships with; a
//! `.cinescore.toml` can replace either one.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Score statistics for one release decade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EraStats {
    pub mean: f64,
    pub std: f64,
}

/// Tables consumed by the analytics extensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceTables {
    /// Genre name -> typical total score for that genre.
    #[serde(default = "default_genre_baselines")]
    pub genre_baselines: BTreeMap<String, f64>,

    /// Decade start year (as a string key, e.g. "1990") -> score statistics.
    #[serde(default = "default_era_stats")]
    pub era_stats: BTreeMap<String, EraStats>,
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self {
            genre_baselines: default_genre_baselines(),
            era_stats: default_era_stats(),
        }
    }
}

impl ReferenceTables {
    /// Statistics for the decade starting at `decade_start`, if supplied.
    pub fn era(&self, decade_start: i32) -> Option<EraStats> {
        self.era_stats.get(&decade_start.to_string()).copied()
    }

    pub fn genre_baseline(&self, genre: &str) -> Option<f64> {
        self.genre_baselines.get(genre).copied()
    }
}

pub fn default_genre_baselines() -> BTreeMap<String, f64> {
    [
        ("Documentary", 72.0),
        ("Drama", 68.0),
        ("Animation", 70.0),
        ("Adventure", 65.0),
        ("Comedy", 62.0),
        ("Action", 63.0),
        ("Horror", 58.0),
        ("Thriller", 64.0),
        ("Science Fiction", 65.0),
        ("Fantasy", 66.0),
        ("Romance", 63.0),
        ("Crime", 67.0),
        ("Mystery", 66.0),
        ("Family", 64.0),
        ("War", 69.0),
        ("History", 70.0),
        ("Music", 68.0),
        ("Western", 65.0),
    ]
    .into_iter()
    .map(|(genre, score)| (genre.to_string(), score))
    .collect()
}

pub fn default_era_stats() -> BTreeMap<String, EraStats> {
    [
        (2020, 64.0, 12.0),
        (2010, 65.0, 11.0),
        (2000, 63.0, 12.0),
        (1990, 66.0, 10.0),
        (1980, 64.0, 11.0),
    ]
    .into_iter()
    .map(|(decade, mean, std)| (decade.to_string(), EraStats { mean, std }))
    .collect()
}
