//! Typed movie records consumed by the scoring core.
//!
//! A [`MovieRecord`] is the only input the scoring core reads. Callers build
//! one from whatever catalog they talk to, run [`MovieRecord::validate`] once,
//! and hand it to the engine by reference.

use crate::core::refined::{NonNegativeF64, RatingScale};
use crate::errors::{CinescoreError, Result};
use serde::{Deserialize, Serialize};
use stillwater::refined::Predicate;

/// One billed cast member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastMember {
    pub name: String,
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub popularity: f64,
}

impl CastMember {
    pub fn new(name: impl Into<String>, popularity: f64) -> Self {
        Self {
            name: name.into(),
            character: None,
            popularity,
        }
    }
}

/// Raw per-movie attributes, as supplied by the data layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: i64,
    pub title: String,
    /// Average user rating on the 0-10 scale.
    #[serde(default, alias = "rating")]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub budget: u64,
    #[serde(default)]
    pub revenue: u64,
    /// Runtime in minutes.
    #[serde(default)]
    pub runtime: Option<u32>,
    /// ISO-like date; only the leading four-digit year is significant.
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    /// Cast ordered by billing rank.
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub director: Option<String>,
}

impl MovieRecord {
    /// Minimal record with every optional attribute absent.
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            vote_average: 0.0,
            vote_count: 0,
            popularity: 0.0,
            budget: 0,
            revenue: 0,
            runtime: None,
            release_date: None,
            genres: Vec::new(),
            cast: Vec::new(),
            director: None,
        }
    }

    /// Release year parsed from the leading four characters of the release date.
    pub fn year(&self) -> Option<i32> {
        parse_year(self.release_date.as_deref()?)
    }

    /// Cast popularities in billing order.
    pub fn cast_popularities(&self) -> Vec<f64> {
        self.cast.iter().map(|c| c.popularity).collect()
    }

    pub fn profit(&self) -> i64 {
        self.revenue as i64 - self.budget as i64
    }

    /// Return on investment in percent, when the budget is known.
    pub fn roi(&self) -> Option<f64> {
        if self.budget > 0 {
            Some((self.revenue as f64 - self.budget as f64) / self.budget as f64 * 100.0)
        } else {
            None
        }
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g.eq_ignore_ascii_case(genre))
    }

    /// Check the record against the documented input domain.
    ///
    /// This is the single validation point; the scoring core assumes a
    /// record that passed it.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(CinescoreError::validation(format!(
                "movie {} has an empty title",
                self.id
            )));
        }

        RatingScale::check(&self.vote_average).map_err(|e| {
            CinescoreError::validation(format!("{}: vote_average {}", e, self.vote_average))
        })?;

        NonNegativeF64::check(&self.popularity).map_err(|e| {
            CinescoreError::validation(format!("{}: popularity {}", e, self.popularity))
        })?;

        for member in &self.cast {
            NonNegativeF64::check(&member.popularity).map_err(|e| {
                CinescoreError::validation(format!(
                    "{}: cast member {} popularity {}",
                    e, member.name, member.popularity
                ))
            })?;
        }

        Ok(())
    }
}

/// Parse the leading four-digit year of a date string.
pub fn parse_year(date: &str) -> Option<i32> {
    let prefix = date.get(..4)?;
    if prefix.chars().all(|c| c.is_ascii_digit()) {
        prefix.parse().ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_parsing() {
        let mut movie = MovieRecord::new(1, "Heat");
        assert_eq!(movie.year(), None);

        movie.release_date = Some("1995-12-15".into());
        assert_eq!(movie.year(), Some(1995));

        movie.release_date = Some("19".into());
        assert_eq!(movie.year(), None);

        movie.release_date = Some("TBA 2026".into());
        assert_eq!(movie.year(), None);
    }

    #[test]
    fn test_roi_requires_budget() {
        let mut movie = MovieRecord::new(1, "Heat");
        movie.revenue = 187_000_000;
        assert_eq!(movie.roi(), None);

        movie.budget = 60_000_000;
        let roi = movie.roi().unwrap();
        assert!((roi - 211.666).abs() < 0.01);
        assert_eq!(movie.profit(), 127_000_000);
    }

    #[test]
    fn test_validate_rejects_out_of_domain_values() {
        let mut movie = MovieRecord::new(1, "Heat");
        assert!(movie.validate().is_ok());

        movie.vote_average = 11.0;
        assert!(movie.validate().is_err());

        movie.vote_average = 7.0;
        movie.popularity = f64::NAN;
        assert!(movie.validate().is_err());

        movie.popularity = 1.0;
        movie.cast.push(CastMember::new("Al Pacino", -3.0));
        assert!(movie.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_title() {
        let movie = MovieRecord::new(7, "   ");
        assert!(movie.validate().is_err());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let movie: MovieRecord =
            serde_json::from_str(r#"{"id": 949, "title": "Heat", "rating": 7.9}"#).unwrap();
        assert_eq!(movie.vote_average, 7.9);
        assert_eq!(movie.runtime, None);
        assert!(movie.cast.is_empty());
    }
}
