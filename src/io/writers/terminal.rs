use colored::*;
use std::io::Write;

use crate::analytics::{FranchiseReport, RankedMovie, Trend};
use crate::comparison::{ComparisonResult, Confidence, Importance, Side};
use crate::core::{Grade, ScoreBreakdown};
use crate::io::output::{AnalysisReport, OutputWriter};

const RULE: &str = "═══════════════════════════════════════════";
const THIN_RULE: &str = "───────────────────────────────────────────";

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, title: &str) -> anyhow::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", RULE.blue())?;
        writeln!(self.writer, "  {}", title.bold().blue())?;
        writeln!(self.writer, "{}", RULE.blue())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

fn colored_grade(grade: Grade) -> ColoredString {
    let label = grade.as_str();
    match grade {
        Grade::APlus | Grade::A | Grade::AMinus => label.green().bold(),
        Grade::BPlus | Grade::B | Grade::BMinus => label.green(),
        Grade::CPlus | Grade::C | Grade::CMinus => label.yellow(),
        _ => label.red(),
    }
}

fn colored_score(score: f64) -> ColoredString {
    let text = format!("{score:.1}");
    match score {
        s if s >= 70.0 => text.green(),
        s if s >= 50.0 => text.yellow(),
        _ => text.red(),
    }
}

/// Fixed-width bar for a 0-100 value.
fn score_bar(value: f64) -> String {
    const WIDTH: usize = 20;
    let filled = ((value.clamp(0.0, 100.0) / 100.0) * WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(WIDTH - filled))
}

fn importance_marker(importance: Importance) -> ColoredString {
    match importance {
        Importance::High => "HIGH".red().bold(),
        Importance::Medium => "MED ".yellow(),
        Importance::Low => "LOW ".dimmed(),
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_breakdown(&mut self, breakdown: &ScoreBreakdown) -> anyhow::Result<()> {
        self.write_header(&breakdown.movie_title.to_uppercase())?;
        writeln!(
            self.writer,
            "Score: {} / 100   Grade: {}   Data confidence: {}",
            colored_score(breakdown.total_score),
            colored_grade(breakdown.grade),
            breakdown.data_confidence
        )?;
        writeln!(self.writer)?;

        for feature in &breakdown.features {
            writeln!(
                self.writer,
                "  {:<18} {} {:>5.1}  ({:>3.0}%)",
                feature.display_name,
                score_bar(feature.normalized_value),
                feature.normalized_value,
                feature.weight * 100.0
            )?;
            writeln!(self.writer, "  {:<18} {}", "", feature.explanation.dimmed())?;
        }
        writeln!(self.writer, "{THIN_RULE}")?;

        for strength in &breakdown.strengths {
            writeln!(self.writer, "  {} {}", "+".green().bold(), strength)?;
        }
        for weakness in &breakdown.weaknesses {
            writeln!(self.writer, "  {} {}", "-".red().bold(), weakness)?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", breakdown.summary)?;
        Ok(())
    }

    fn write_comparison(&mut self, comparison: &ComparisonResult) -> anyhow::Result<()> {
        let first = &comparison.movie1_breakdown;
        let second = &comparison.movie2_breakdown;
        self.write_header(&format!("{} vs {}", first.movie_title, second.movie_title))?;

        for breakdown in [first, second] {
            writeln!(
                self.writer,
                "  {:<30} {} ({})",
                breakdown.movie_title,
                colored_score(breakdown.total_score),
                colored_grade(breakdown.grade)
            )?;
        }
        writeln!(self.writer)?;

        let confidence = match comparison.confidence {
            Confidence::Decisive => comparison.confidence.as_str().green().bold(),
            Confidence::Clear => comparison.confidence.as_str().green(),
            Confidence::Close | Confidence::VeryClose => comparison.confidence.as_str().yellow(),
        };
        writeln!(self.writer, "Confidence: {confidence}")?;
        writeln!(self.writer, "{}", comparison.verdict.bold())?;
        writeln!(self.writer, "{THIN_RULE}")?;

        for arg in &comparison.arguments {
            let winner = match arg.winner {
                Side::First => first.movie_title.as_str(),
                Side::Second => second.movie_title.as_str(),
                Side::Tie => "tie",
            };
            writeln!(
                self.writer,
                "  [{}] {:<18} {:>14} | {:<14} -> {}",
                importance_marker(arg.importance),
                arg.factor,
                arg.movie1_value,
                arg.movie2_value,
                winner.cyan()
            )?;
            writeln!(self.writer, "         {}", arg.explanation.dimmed())?;
        }
        Ok(())
    }

    fn write_ranking(&mut self, ranking: &[RankedMovie]) -> anyhow::Result<()> {
        self.write_header("TOP MOVIES")?;
        if ranking.is_empty() {
            writeln!(self.writer, "No movies matched the filters.")?;
            return Ok(());
        }
        for entry in ranking {
            let year = entry.year.map_or_else(|| "----".to_string(), |y| y.to_string());
            writeln!(
                self.writer,
                "{:>3}. {:<35} {} {:>5} {:<3}",
                entry.rank,
                entry.title,
                year,
                colored_score(entry.score),
                colored_grade(entry.grade)
            )?;
            if let Some(strength) = &entry.top_strength {
                writeln!(self.writer, "     {}", strength.dimmed())?;
            }
        }
        Ok(())
    }

    fn write_franchise(&mut self, report: &FranchiseReport) -> anyhow::Result<()> {
        self.write_header(&format!("{} FRANCHISE", report.franchise.to_uppercase()))?;
        let trend = match report.trend {
            Trend::Improving => report.trend.to_string().green(),
            Trend::Declining => report.trend.to_string().red(),
            Trend::Stable | Trend::InsufficientData => report.trend.to_string().normal(),
        };
        writeln!(
            self.writer,
            "Entries: {}   Average: {}   Trend: {}",
            report.total_entries,
            colored_score(report.average_score),
            trend
        )?;
        writeln!(self.writer, "{THIN_RULE}")?;
        for entry in &report.entries {
            let year = entry.year.map_or_else(|| "----".to_string(), |y| y.to_string());
            writeln!(
                self.writer,
                "  {} {:<35} {} {}",
                year,
                entry.title,
                colored_score(entry.score),
                colored_grade(entry.grade)
            )?;
        }
        writeln!(self.writer, "{THIN_RULE}")?;
        writeln!(self.writer, "Best:  {}", report.best_entry.title.green())?;
        writeln!(self.writer, "Worst: {}", report.worst_entry.title.red())?;
        if let Some(profit) = report.total_profit {
            writeln!(self.writer, "Total profit: ${profit}")?;
        }
        Ok(())
    }

    fn write_analysis(&mut self, title: &str, report: &AnalysisReport) -> anyhow::Result<()> {
        match report {
            AnalysisReport::Genre(genre) => {
                self.write_header(&format!("GENRE-ADJUSTED SCORE: {title}"))?;
                writeln!(
                    self.writer,
                    "Raw: {}   Adjusted: {}   Adjustment: {:+.2}",
                    colored_score(genre.raw_score),
                    colored_score(genre.adjusted_score),
                    genre.adjustment
                )?;
                writeln!(self.writer, "{}", genre.explanation)?;
            }
            AnalysisReport::Era(era) => {
                self.write_header(&format!("ERA COMPARISON: {title}"))?;
                writeln!(
                    self.writer,
                    "Era: {}   Percentile: {:.1}",
                    era.era.bold(),
                    era.era_percentile
                )?;
                writeln!(self.writer, "{}", era.explanation)?;
            }
            AnalysisReport::Divergence(div) => {
                self.write_header(&format!("AUDIENCE VS CRITICS: {title}"))?;
                let estimated = if div.critic_score_estimated {
                    " (estimated)".dimmed()
                } else {
                    "".normal()
                };
                writeln!(
                    self.writer,
                    "Audience: {:.1}   Critics: {:.1}{}   Divergence: {:+.2}",
                    div.audience_score, div.critic_score, estimated, div.divergence
                )?;
                writeln!(self.writer, "{}", div.explanation.bold())?;
                writeln!(self.writer, "{}", div.insight)?;
            }
            AnalysisReport::Rewatchability(rw) => {
                self.write_header(&format!("REWATCHABILITY: {title}"))?;
                writeln!(
                    self.writer,
                    "{} {} ({})",
                    score_bar(rw.score),
                    colored_score(rw.score),
                    rw.category
                )?;
                writeln!(self.writer, "{}", rw.description)?;
            }
            AnalysisReport::Cast(cast) => {
                self.write_header(&format!("CAST ANALYSIS: {title}"))?;
                writeln!(self.writer, "{}", cast.analysis_text)?;
                for actor in &cast.notable_actors {
                    writeln!(
                        self.writer,
                        "  {:>2}. {:<30} {:.1}",
                        actor.rank, actor.name, actor.popularity
                    )?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_bar_width() {
        assert_eq!(score_bar(0.0).chars().count(), 20);
        assert_eq!(score_bar(100.0), "█".repeat(20));
        assert_eq!(score_bar(50.0).chars().filter(|&c| c == '█').count(), 10);
        assert_eq!(score_bar(250.0), "█".repeat(20));
    }

    #[test]
    fn test_ranking_lists_titles() {
        colored::control::set_override(false);
        let ranking = vec![RankedMovie {
            rank: 1,
            movie_id: 7,
            title: "Seven".into(),
            year: None,
            score: 71.0,
            grade: Grade::BMinus,
            top_strength: Some("User Rating (82/100)".into()),
        }];
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer)
            .write_ranking(&ranking)
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("Seven"));
        assert!(text.contains("User Rating (82/100)"));
    }
}
