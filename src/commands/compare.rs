use anyhow::Result;
use std::path::Path;

use super::{read_movie, CommandContext};
use crate::comparison::MovieComparator;

pub fn compare_movies(
    ctx: &CommandContext,
    first: &Path,
    second: &Path,
    weight_overrides: &[String],
) -> Result<()> {
    let (movie1, movie2) = rayon::join(|| read_movie(first), || read_movie(second));
    let (movie1, movie2) = (movie1?, movie2?);

    let weights = ctx.config.weights().with_overrides(weight_overrides)?;
    let comparator = MovieComparator::new(ctx.engine().with_weights(weights));
    let result = comparator.compare(&movie1, &movie2);

    tracing::info!(
        winner = %result.winner,
        confidence = %result.confidence,
        difference = result.score_difference,
        "compared"
    );

    ctx.with_writer(|writer| writer.write_comparison(&result))
}
