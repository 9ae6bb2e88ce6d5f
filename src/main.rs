use anyhow::Result;
use clap::Parser;
use cinescore::analytics::RankFilter;
use cinescore::cli::{Cli, Commands};
use cinescore::commands::{self, CommandContext, RankConfig};
use cinescore::observability::init_tracing;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbosity)?;

    if let Commands::Init { force } = cli.command {
        return commands::init_config(force);
    }

    let ctx = CommandContext::load(
        cli.config.as_deref(),
        cli.format.map(Into::into),
        cli.output.clone(),
    )?;

    match cli.command {
        Commands::Score { movie, weights } => commands::score_movie(&ctx, &movie, &weights),
        Commands::Compare {
            first,
            second,
            weights,
        } => commands::compare_movies(&ctx, &first, &second, &weights),
        Commands::Analyze {
            movie,
            kind,
            critic_score,
        } => commands::run_analysis(&ctx, &movie, kind, critic_score),
        Commands::Franchise { name, movies } => commands::analyze_franchise(&ctx, &name, &movies),
        Commands::Rank {
            movies,
            genre,
            year_min,
            year_max,
            min_votes,
            limit,
        } => {
            let filter = RankFilter {
                genre,
                year_min,
                year_max,
                min_votes,
                limit,
            };
            commands::rank_movies(
                &ctx,
                RankConfig {
                    paths: movies,
                    filter,
                },
            )
        }
        Commands::Init { .. } => Ok(()),
    }
}
