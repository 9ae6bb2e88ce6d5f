use anyhow::{ensure, Result};
use std::path::Path;

use super::{read_movie, CommandContext};
use crate::analytics::MovieAnalytics;
use crate::cli::AnalysisKind;
use crate::io::output::AnalysisReport;

pub fn run_analysis(
    ctx: &CommandContext,
    path: &Path,
    kind: AnalysisKind,
    critic_score: Option<f64>,
) -> Result<()> {
    if let Some(score) = critic_score {
        ensure!(
            (0.0..=10.0).contains(&score),
            "critic score must be between 0 and 10 (got {score})"
        );
    }

    let movie = read_movie(path)?;
    let analytics = MovieAnalytics::from_config(&ctx.config);

    let report = match kind {
        AnalysisKind::Genre => AnalysisReport::Genre(analytics.genre_adjusted_score(&movie)),
        AnalysisKind::Era => AnalysisReport::Era(analytics.era_comparison(&movie)),
        AnalysisKind::Divergence => {
            AnalysisReport::Divergence(analytics.divergence(&movie, critic_score))
        }
        AnalysisKind::Rewatchability => {
            AnalysisReport::Rewatchability(analytics.rewatchability(&movie))
        }
        AnalysisKind::Cast => AnalysisReport::Cast(analytics.cast(&movie)),
    };

    ctx.with_writer(|writer| writer.write_analysis(&movie.title, &report))
}
