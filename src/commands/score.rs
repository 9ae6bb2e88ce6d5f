use anyhow::Result;
use std::path::Path;

use super::{read_movie, CommandContext};

pub fn score_movie(ctx: &CommandContext, path: &Path, weight_overrides: &[String]) -> Result<()> {
    let movie = read_movie(path)?;
    let weights = ctx.config.weights().with_overrides(weight_overrides)?;
    let breakdown = ctx.engine().with_weights(weights).score(&movie);

    tracing::info!(
        movie = %movie.title,
        score = breakdown.total_score,
        grade = %breakdown.grade,
        "scored"
    );

    ctx.with_writer(|writer| writer.write_breakdown(&breakdown))
}
