use anyhow::Result;
use rayon::prelude::*;
use std::path::PathBuf;

use super::{read_movie_files, CommandContext};
use crate::analytics::{rank_scored, RankFilter, ScoredMovie};

pub struct RankConfig {
    pub paths: Vec<PathBuf>,
    pub filter: RankFilter,
}

pub fn rank_movies(ctx: &CommandContext, config: RankConfig) -> Result<()> {
    let movies = read_movie_files(&config.paths)?;
    let engine = ctx.engine();

    let scored: Vec<ScoredMovie<'_>> = movies
        .par_iter()
        .filter(|movie| config.filter.matches(movie))
        .map(|movie| ScoredMovie::score(&engine, movie))
        .collect();

    tracing::debug!(
        loaded = movies.len(),
        matched = scored.len(),
        "filtered movies for ranking"
    );

    let ranking = rank_scored(scored, config.filter.limit);
    ctx.with_writer(|writer| writer.write_ranking(&ranking))
}
