use serde::{Deserialize, Serialize};

use super::ScoredMovie;
use crate::core::{Grade, MovieRecord};

pub const DEFAULT_RANK_LIMIT: usize = 20;

/// Criteria a movie must meet to be ranked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankFilter {
    pub genre: Option<String>,
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
    pub min_votes: Option<u64>,
    pub limit: usize,
}

impl Default for RankFilter {
    fn default() -> Self {
        Self {
            genre: None,
            year_min: None,
            year_max: None,
            min_votes: None,
            limit: DEFAULT_RANK_LIMIT,
        }
    }
}

impl RankFilter {
    /// Whether the movie passes every configured criterion. A year bound
    /// excludes movies without a known release year.
    pub fn matches(&self, movie: &MovieRecord) -> bool {
        let genre_ok = self
            .genre
            .as_deref()
            .map_or(true, |genre| movie.has_genre(genre));
        let votes_ok = self.min_votes.map_or(true, |min| movie.vote_count >= min);
        let year = movie.year();
        let min_ok = self
            .year_min
            .map_or(true, |min| year.is_some_and(|y| y >= min));
        let max_ok = self
            .year_max
            .map_or(true, |max| year.is_some_and(|y| y <= max));

        genre_ok && votes_ok && min_ok && max_ok
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMovie {
    /// 1-based position
    pub rank: usize,
    pub movie_id: i64,
    pub title: String,
    pub year: Option<i32>,
    pub score: f64,
    pub grade: Grade,
    pub top_strength: Option<String>,
}

/// Rank already-scored movies by total score, highest first.
///
/// Movies are expected to be pre-filtered. Equal scores keep input order.
pub fn rank_scored(mut scored: Vec<ScoredMovie<'_>>, limit: usize) -> Vec<RankedMovie> {
    scored.sort_by(|a, b| b.breakdown.total_score.total_cmp(&a.breakdown.total_score));

    scored
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(i, s)| RankedMovie {
            rank: i + 1,
            movie_id: s.movie.id,
            title: s.movie.title.clone(),
            year: s.movie.year(),
            score: s.breakdown.total_score,
            grade: s.breakdown.grade,
            top_strength: s.breakdown.strengths.into_iter().next(),
        })
        .collect()
}
