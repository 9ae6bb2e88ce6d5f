// Shared helpers for cinescore integration tests
#![allow(dead_code)]

use cinescore::core::{CastMember, MovieRecord};
use cinescore::io::load_movie;
use cinescore::ScoringEngine;
use std::path::PathBuf;

/// Reference year used by every test that depends on release recency.
pub const REFERENCE_YEAR: i32 = 2025;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join("fixtures")
        .join(name)
}

pub fn load_fixture(name: &str) -> MovieRecord {
    load_movie(&fixture_path(name)).expect("fixture should load")
}

pub fn engine() -> ScoringEngine {
    ScoringEngine::default().with_reference_year(REFERENCE_YEAR)
}

/// The movie every regression test anchors on (86.13, A-).
pub fn golden_movie() -> MovieRecord {
    let mut movie = MovieRecord::new(1001, "The Long Orbit");
    movie.vote_average = 8.5;
    movie.vote_count = 12_000;
    movie.popularity = 60.0;
    movie.revenue = 500_000_000;
    movie.budget = 100_000_000;
    movie.runtime = Some(118);
    movie.release_date = Some("2015-07-16".to_string());
    movie.cast = vec![
        CastMember::new("Jon Hale", 80.0),
        CastMember::new("Ada Brook", 40.0),
        CastMember::new("Tom Vey", 20.0),
    ];
    movie
}

/// A sparse record: nothing but a title.
pub fn bare_movie(id: i64, title: &str) -> MovieRecord {
    MovieRecord::new(id, title)
}
