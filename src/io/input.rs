//! Loading movie records from JSON files.
//!
//! A file holds either a single movie object or an array of them. Every
//! record is validated once here; the scoring core trusts what it receives.

use serde::Deserialize;
use std::path::Path;

use super::read_file;
use crate::core::MovieRecord;
use crate::errors::{CinescoreError, Result};

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(Box<MovieRecord>),
    Many(Vec<MovieRecord>),
}

/// Parse and validate every movie in a JSON document.
pub fn parse_movies(contents: &str, path: Option<&Path>) -> Result<Vec<MovieRecord>> {
    let parsed: OneOrMany = serde_json::from_str(contents).map_err(|e| {
        CinescoreError::parse(
            format!("invalid movie JSON: {e}"),
            path.map(Path::to_path_buf),
        )
    })?;

    let movies = match parsed {
        OneOrMany::One(movie) => vec![*movie],
        OneOrMany::Many(movies) => movies,
    };

    for movie in &movies {
        movie.validate()?;
    }

    Ok(movies)
}

/// Load a file that must contain exactly one movie.
pub fn load_movie(path: &Path) -> Result<MovieRecord> {
    let mut movies = load_movies(path)?;
    match movies.len() {
        1 => Ok(movies.remove(0)),
        0 => Err(CinescoreError::not_found(format!(
            "no movie found in {}",
            path.display()
        ))),
        n => Err(CinescoreError::validation(format!(
            "expected one movie in {}, found {n}",
            path.display()
        ))),
    }
}

/// Load every movie in a file.
pub fn load_movies(path: &Path) -> Result<Vec<MovieRecord>> {
    let contents = read_file(path)?;
    let movies = parse_movies(&contents, Some(path))?;
    tracing::debug!(path = %path.display(), count = movies.len(), "loaded movies");
    Ok(movies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use indoc::indoc;

    #[test]
    fn test_parse_single_movie_with_defaults() {
        let movies = parse_movies(r#"{"id": 603, "title": "The Matrix", "rating": 8.2}"#, None)
            .unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].vote_average, 8.2);
        assert_eq!(movies[0].runtime, None);
        assert!(movies[0].cast.is_empty());
    }

    #[test]
    fn test_parse_movie_array() {
        let json = indoc! {r#"
            [
              {"id": 1, "title": "One", "genres": ["Drama"]},
              {"id": 2, "title": "Two", "cast": [{"name": "Lead", "popularity": 12.5}]}
            ]
        "#};
        let movies = parse_movies(json, None).unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[1].cast[0].popularity, 12.5);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = parse_movies("{\"id\": 1,", None).unwrap_err();
        assert_eq!(err.code(), ErrorCode::PARSE_MOVIE);
    }

    #[test]
    fn test_out_of_range_rating_rejected() {
        let err = parse_movies(r#"{"id": 1, "title": "Bad", "vote_average": 11.0}"#, None)
            .unwrap_err();
        assert!(matches!(err, CinescoreError::Validation { .. }));
    }

    #[test]
    fn test_load_movie_missing_file() {
        let err = load_movie(Path::new("/definitely/not/here.json")).unwrap_err();
        assert_eq!(err.code(), ErrorCode::IO_FILE_NOT_FOUND);
    }
}
