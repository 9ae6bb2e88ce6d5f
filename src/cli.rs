use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cinescore")]
#[command(about = "Explainable movie scoring and head-to-head comparison", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (defaults to the config file's choice, then terminal)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file (defaults to stdout)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Configuration file (defaults to searching for .cinescore.toml)
    #[arg(short, long, global = true, env = "CINESCORE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a single movie with a per-feature breakdown
    Score {
        /// Movie record (JSON)
        movie: PathBuf,

        /// Weight overrides, e.g. vote_average=0.4,popularity=0.1
        #[arg(short, long, value_delimiter = ',')]
        weights: Vec<String>,
    },

    /// Compare two movies head to head
    Compare {
        /// First movie record (JSON)
        first: PathBuf,

        /// Second movie record (JSON)
        second: PathBuf,

        /// Weight overrides applied to both movies
        #[arg(short, long, value_delimiter = ',')]
        weights: Vec<String>,
    },

    /// Run one of the derived analyses on a movie
    Analyze {
        /// Movie record (JSON)
        movie: PathBuf,

        /// Which analysis to run
        #[arg(short, long, value_enum)]
        kind: AnalysisKind,

        /// Critic score (0-10) for the divergence analysis; estimated when absent
        #[arg(long)]
        critic_score: Option<f64>,
    },

    /// Analyze a franchise's quality trend and box office
    Franchise {
        /// Franchise name
        name: String,

        /// Movie records (JSON), one or more per file
        #[arg(required = true)]
        movies: Vec<PathBuf>,
    },

    /// Rank movies by score, with optional filters
    Rank {
        /// Movie records (JSON), one or more per file
        #[arg(required = true)]
        movies: Vec<PathBuf>,

        /// Only movies with this genre
        #[arg(long)]
        genre: Option<String>,

        /// Earliest release year
        #[arg(long)]
        year_min: Option<i32>,

        /// Latest release year
        #[arg(long)]
        year_max: Option<i32>,

        /// Minimum vote count
        #[arg(long)]
        min_votes: Option<u64>,

        /// Maximum number of movies to list
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Initialize a .cinescore.toml configuration file
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AnalysisKind {
    /// Score relative to genre expectations
    Genre,
    /// Percentile among films of the same decade
    Era,
    /// Audience versus critic reception
    Divergence,
    /// How likely the film is to be rewatched
    Rewatchability,
    /// Star power and depth of the cast
    Cast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_score_with_weights() {
        let cli = Cli::try_parse_from([
            "cinescore",
            "score",
            "movie.json",
            "--weights",
            "vote_average=0.5,popularity=0.1",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Commands::Score { movie, weights } => {
                assert_eq!(movie, PathBuf::from("movie.json"));
                assert_eq!(weights, vec!["vote_average=0.5", "popularity=0.1"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_rank_requires_files() {
        assert!(Cli::try_parse_from(["cinescore", "rank"]).is_err());
    }

    #[test]
    fn test_output_format_conversion() {
        let format: crate::io::output::OutputFormat = OutputFormat::Markdown.into();
        assert_eq!(format, crate::io::output::OutputFormat::Markdown);
    }
}
