use std::io::Write;

use crate::analytics::{FranchiseReport, RankedMovie};
use crate::comparison::ComparisonResult;
use crate::core::ScoreBreakdown;
use crate::io::output::{AnalysisReport, OutputWriter};
use crate::scoring::explanations::format_thousands;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_feature_table(&mut self, breakdown: &ScoreBreakdown) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "| Feature | Score | Weight | Contribution | Explanation |"
        )?;
        writeln!(
            self.writer,
            "|---------|-------|--------|--------------|-------------|"
        )?;
        for feature in &breakdown.features {
            writeln!(
                self.writer,
                "| {} | {:.1} | {:.0}% | {:.2} | {} |",
                feature.display_name,
                feature.normalized_value,
                feature.weight * 100.0,
                feature.weighted_score,
                feature.explanation
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_bullets(&mut self, heading: &str, items: &[String]) -> anyhow::Result<()> {
        if items.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "### {heading}")?;
        writeln!(self.writer)?;
        for item in items {
            writeln!(self.writer, "- {item}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_breakdown(&mut self, breakdown: &ScoreBreakdown) -> anyhow::Result<()> {
        writeln!(self.writer, "# {}", breakdown.movie_title)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "**Score:** {:.2}/100 | **Grade:** {} | **Data confidence:** {}",
            breakdown.total_score, breakdown.grade, breakdown.data_confidence
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", breakdown.summary)?;
        writeln!(self.writer)?;
        self.write_feature_table(breakdown)?;
        self.write_bullets("Strengths", &breakdown.strengths)?;
        self.write_bullets("Weaknesses", &breakdown.weaknesses)?;
        Ok(())
    }

    fn write_comparison(&mut self, comparison: &ComparisonResult) -> anyhow::Result<()> {
        let title1 = &comparison.movie1_breakdown.movie_title;
        let title2 = &comparison.movie2_breakdown.movie_title;

        writeln!(self.writer, "# {title1} vs {title2}")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "**Verdict:** {} (confidence: {}, difference {:.2})",
            comparison.verdict, comparison.confidence, comparison.score_difference
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "## Arguments")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Factor | {title1} | {title2} | Winner | Importance | Explanation |"
        )?;
        writeln!(
            self.writer,
            "|--------|------|------|--------|------------|-------------|"
        )?;
        for arg in &comparison.arguments {
            let winner = match arg.winner {
                crate::comparison::Side::First => title1.as_str(),
                crate::comparison::Side::Second => title2.as_str(),
                crate::comparison::Side::Tie => "tie",
            };
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} | {} |",
                arg.factor,
                arg.movie1_value,
                arg.movie2_value,
                winner,
                arg.importance,
                arg.explanation
            )?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", comparison.detailed_analysis)?;
        Ok(())
    }

    fn write_ranking(&mut self, ranking: &[RankedMovie]) -> anyhow::Result<()> {
        writeln!(self.writer, "# Top Movies")?;
        writeln!(self.writer)?;
        if ranking.is_empty() {
            writeln!(self.writer, "No movies matched the filters.")?;
            return Ok(());
        }
        writeln!(self.writer, "| # | Title | Year | Score | Grade | Top strength |")?;
        writeln!(self.writer, "|---|-------|------|-------|-------|--------------|")?;
        for entry in ranking {
            writeln!(
                self.writer,
                "| {} | {} | {} | {:.2} | {} | {} |",
                entry.rank,
                entry.title,
                entry.year.map_or_else(|| "-".to_string(), |y| y.to_string()),
                entry.score,
                entry.grade,
                entry.top_strength.as_deref().unwrap_or("-")
            )?;
        }
        Ok(())
    }

    fn write_franchise(&mut self, report: &FranchiseReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# {} Franchise", report.franchise)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "**Entries:** {} | **Average score:** {:.2} | **Trend:** {}",
            report.total_entries, report.average_score, report.trend
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Title | Year | Score | Grade | Revenue | Profit |")?;
        writeln!(self.writer, "|-------|------|-------|-------|---------|--------|")?;
        for entry in &report.entries {
            writeln!(
                self.writer,
                "| {} | {} | {:.2} | {} | ${} | {} |",
                entry.title,
                entry.year.map_or_else(|| "-".to_string(), |y| y.to_string()),
                entry.score,
                entry.grade,
                format_thousands(entry.revenue),
                entry.profit.map_or_else(|| "-".to_string(), |p| format!("${p}"))
            )?;
        }
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "- Best: {} ({:.2})",
            report.best_entry.title, report.best_entry.score
        )?;
        writeln!(
            self.writer,
            "- Worst: {} ({:.2})",
            report.worst_entry.title, report.worst_entry.score
        )?;
        if let Some(profit) = report.total_profit {
            writeln!(self.writer, "- Total profit: ${profit}")?;
        }
        Ok(())
    }

    fn write_analysis(&mut self, title: &str, report: &AnalysisReport) -> anyhow::Result<()> {
        match report {
            AnalysisReport::Genre(genre) => {
                writeln!(self.writer, "# Genre-Adjusted Score: {title}")?;
                writeln!(self.writer)?;
                writeln!(
                    self.writer,
                    "- Raw score: {:.2}\n- Adjusted score: {:.2}\n- Adjustment: {:+.2}",
                    genre.raw_score, genre.adjusted_score, genre.adjustment
                )?;
                writeln!(self.writer)?;
                writeln!(self.writer, "{}", genre.explanation)?;
            }
            AnalysisReport::Era(era) => {
                writeln!(self.writer, "# Era Comparison: {title}")?;
                writeln!(self.writer)?;
                writeln!(
                    self.writer,
                    "- Era: {}\n- Percentile: {:.1}",
                    era.era, era.era_percentile
                )?;
                writeln!(self.writer)?;
                writeln!(self.writer, "{}", era.explanation)?;
            }
            AnalysisReport::Divergence(div) => {
                writeln!(self.writer, "# Audience vs Critics: {title}")?;
                writeln!(self.writer)?;
                writeln!(
                    self.writer,
                    "- Audience: {:.1}\n- Critics: {:.1}{}\n- Category: {}",
                    div.audience_score,
                    div.critic_score,
                    if div.critic_score_estimated { " (estimated)" } else { "" },
                    div.category
                )?;
                writeln!(self.writer)?;
                writeln!(self.writer, "{} {}", div.explanation, div.insight)?;
            }
            AnalysisReport::Rewatchability(rw) => {
                writeln!(self.writer, "# Rewatchability: {title}")?;
                writeln!(self.writer)?;
                writeln!(
                    self.writer,
                    "**{:.2}/100** ({}): {}",
                    rw.score, rw.category, rw.description
                )?;
                writeln!(self.writer)?;
                writeln!(
                    self.writer,
                    "- Runtime: {:.0}\n- Genre: {:.0}\n- Popularity: {:.0}\n- Rating: {:.0}",
                    rw.factors.runtime, rw.factors.genre, rw.factors.popularity, rw.factors.rating
                )?;
            }
            AnalysisReport::Cast(cast) => {
                writeln!(self.writer, "# Cast Analysis: {title}")?;
                writeln!(self.writer)?;
                writeln!(self.writer, "{}", cast.analysis_text)?;
                if !cast.notable_actors.is_empty() {
                    writeln!(self.writer)?;
                    for actor in &cast.notable_actors {
                        writeln!(
                            self.writer,
                            "{}. {} ({:.1})",
                            actor.rank, actor.name, actor.popularity
                        )?;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CastMember, MovieRecord};
    use crate::scoring::ScoringEngine;

    #[test]
    fn test_breakdown_has_feature_table() {
        let mut movie = MovieRecord::new(1, "Heat");
        movie.vote_average = 8.3;
        movie.cast = vec![CastMember::new("Al", 40.0)];
        let breakdown = ScoringEngine::default()
            .with_reference_year(2025)
            .score(&movie);

        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer)
            .write_breakdown(&breakdown)
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("# Heat\n"));
        assert!(text.contains("| User Rating | 86.9 | 25% |"));
        assert!(text.contains("### Weaknesses"));
    }

    #[test]
    fn test_empty_ranking() {
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer).write_ranking(&[]).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("No movies matched the filters."));
    }
}
