use serde::Serialize;
use std::io::Write;

use crate::analytics::{
    CastAnalysis, Divergence, EraComparison, FranchiseReport, GenreAdjustedScore, RankedMovie,
    Rewatchability,
};
use crate::comparison::ComparisonResult;
use crate::core::ScoreBreakdown;

use super::writers::{JsonWriter, MarkdownWriter, TerminalWriter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl OutputFormat {
    /// Parse a format name as written in `.cinescore.toml`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "markdown" | "md" => Some(OutputFormat::Markdown),
            "terminal" => Some(OutputFormat::Terminal),
            _ => None,
        }
    }
}

/// Result of a single `analyze` run.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AnalysisReport {
    Genre(GenreAdjustedScore),
    Era(EraComparison),
    Divergence(Divergence),
    Rewatchability(Rewatchability),
    Cast(CastAnalysis),
}

pub trait OutputWriter {
    fn write_breakdown(&mut self, breakdown: &ScoreBreakdown) -> anyhow::Result<()>;

    fn write_comparison(&mut self, comparison: &ComparisonResult) -> anyhow::Result<()>;

    fn write_ranking(&mut self, ranking: &[RankedMovie]) -> anyhow::Result<()>;

    fn write_franchise(&mut self, report: &FranchiseReport) -> anyhow::Result<()>;

    /// Analytics records that have a movie title to show alongside them.
    fn write_analysis(&mut self, title: &str, report: &AnalysisReport) -> anyhow::Result<()>;
}

pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}
