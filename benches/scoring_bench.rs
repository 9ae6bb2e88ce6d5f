//! Benchmarks for single-movie scoring, head-to-head comparison and ranking.

use cinescore::analytics::{MovieAnalytics, RankFilter};
use cinescore::config::ReferenceTables;
use cinescore::core::{CastMember, MovieRecord};
use cinescore::{MovieComparator, ScoringEngine};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn create_movie(id: i64, rating: f64, votes: u64, cast_size: usize) -> MovieRecord {
    let mut movie = MovieRecord::new(id, format!("Movie {id}"));
    movie.vote_average = rating;
    movie.vote_count = votes;
    movie.popularity = (id % 300) as f64 + 1.0;
    movie.budget = 50_000_000;
    movie.revenue = 40_000_000 + (id as u64 % 50) * 10_000_000;
    movie.runtime = Some(80 + (id % 90) as u32);
    movie.release_date = Some(format!("{}-01-01", 1970 + id % 55));
    movie.genres = vec!["Drama".to_string(), "Action".to_string()];
    movie.cast = (0..cast_size)
        .map(|i| CastMember::new(format!("Actor {i}"), 80.0 / (i as f64 + 1.0)))
        .collect();
    movie
}

fn bench_score(c: &mut Criterion) {
    let engine = ScoringEngine::default().with_reference_year(2025);
    let movie = create_movie(1, 8.5, 12_000, 10);

    c.bench_function("score_single_movie", |b| {
        b.iter(|| engine.score(black_box(&movie)))
    });
}

fn bench_compare(c: &mut Criterion) {
    let comparator = MovieComparator::new(ScoringEngine::default().with_reference_year(2025));
    let first = create_movie(1, 8.5, 12_000, 10);
    let second = create_movie(2, 7.1, 3_400, 4);

    c.bench_function("compare_two_movies", |b| {
        b.iter(|| comparator.compare(black_box(&first), black_box(&second)))
    });
}

fn bench_rank(c: &mut Criterion) {
    let analytics = MovieAnalytics::new(
        ScoringEngine::default().with_reference_year(2025),
        ReferenceTables::default(),
    );
    let filter = RankFilter::default();

    let mut group = c.benchmark_group("rank");
    for size in [100, 1000] {
        let movies: Vec<MovieRecord> = (0..size)
            .map(|i| create_movie(i, 4.0 + (i % 60) as f64 / 10.0, (i as u64) * 37, 5))
            .collect();
        group.bench_with_input(BenchmarkId::new("rank_movies", size), &movies, |b, movies| {
            b.iter(|| analytics.rank(black_box(movies), &filter))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_score, bench_compare, bench_rank);
criterion_main!(benches);
