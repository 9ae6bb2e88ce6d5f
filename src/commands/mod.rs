//! CLI command implementations.
//!
//! Each submodule handles one subcommand. Commands share a [`CommandContext`]
//! carrying the loaded configuration and output settings; file loading and
//! batch scoring run in parallel here, never inside the scoring core.
//!
//! Available commands:
//! - **score**: score one movie with a full breakdown
//! - **compare**: head-to-head comparison of two movies
//! - **analyze**: genre, era, divergence, rewatchability or cast analysis
//! - **franchise**: quality trend and box office over a franchise
//! - **rank**: filter and rank a set of movies
//! - **init**: write a default `.cinescore.toml`

pub mod analyze;
pub mod compare;
pub mod franchise;
pub mod init;
pub mod rank;
pub mod score;

pub use analyze::run_analysis;
pub use compare::compare_movies;
pub use franchise::analyze_franchise;
pub use init::init_config;
pub use rank::{rank_movies, RankConfig};
pub use score::score_movie;

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::{load_config, load_config_from, CinescoreConfig};
use crate::core::MovieRecord;
use crate::io::output::{create_writer, OutputFormat, OutputWriter};
use crate::io::{load_movie, load_movies};
use crate::scoring::ScoringEngine;

/// Configuration and output settings shared by every command.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: CinescoreConfig,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

impl CommandContext {
    /// Load configuration (explicit path or discovery) and resolve the output
    /// format: flag first, then the config file, then terminal.
    pub fn load(
        config_path: Option<&Path>,
        format: Option<OutputFormat>,
        output: Option<PathBuf>,
    ) -> Result<Self> {
        let config = match config_path {
            Some(path) => load_config_from(path)?,
            None => load_config(),
        };
        Ok(Self::new(config, format, output))
    }

    pub fn new(config: CinescoreConfig, format: Option<OutputFormat>, output: Option<PathBuf>) -> Self {
        let configured = config
            .output
            .as_ref()
            .and_then(|o| o.default_format.as_deref())
            .and_then(OutputFormat::from_name);
        let format = format.or(configured).unwrap_or(OutputFormat::Terminal);

        Self {
            config,
            format,
            output,
        }
    }

    pub fn engine(&self) -> ScoringEngine {
        ScoringEngine::from_config(&self.config)
    }

    /// Run `render` against a writer for the configured format and destination.
    pub fn with_writer<F>(&self, render: F) -> Result<()>
    where
        F: FnOnce(&mut dyn OutputWriter) -> Result<()>,
    {
        let mut sink: Box<dyn Write> = match &self.output {
            Some(path) => {
                colored::control::set_override(false);
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(std::io::stdout().lock()),
        };

        {
            let mut writer = create_writer(self.format, Box::new(&mut sink));
            render(writer.as_mut())?;
        }

        sink.flush()?;
        Ok(())
    }
}

pub(crate) fn read_movie(path: &Path) -> Result<MovieRecord> {
    load_movie(path).with_context(|| format!("Failed to load movie from {}", path.display()))
}

/// Load every movie in every file, in argument order.
pub(crate) fn read_movie_files(paths: &[PathBuf]) -> Result<Vec<MovieRecord>> {
    let batches = paths
        .par_iter()
        .map(|path| {
            load_movies(path)
                .with_context(|| format!("Failed to load movies from {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(batches.into_iter().flatten().collect())
}
