use anyhow::{anyhow, Result};
use rayon::prelude::*;
use std::path::PathBuf;

use super::{read_movie_files, CommandContext};
use crate::analytics::{franchise_report, ScoredMovie};

pub fn analyze_franchise(ctx: &CommandContext, name: &str, paths: &[PathBuf]) -> Result<()> {
    let movies = read_movie_files(paths)?;
    let engine = ctx.engine();

    let scored: Vec<ScoredMovie<'_>> = movies
        .par_iter()
        .map(|movie| ScoredMovie::score(&engine, movie))
        .collect();

    let report = franchise_report(name, scored)
        .ok_or_else(|| anyhow!("No movies provided for franchise {name}"))?;

    tracing::info!(
        franchise = name,
        entries = report.total_entries,
        trend = %report.trend,
        "analyzed franchise"
    );

    ctx.with_writer(|writer| writer.write_franchise(&report))
}
