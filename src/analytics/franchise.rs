use serde::{Deserialize, Serialize};
use std::fmt;

use super::ScoredMovie;
use crate::core::Grade;
use crate::scoring::normalizers::round2;

/// Gap between half averages needed to call a trend.
const TREND_THRESHOLD: f64 = 2.0;
const MIN_ENTRIES_FOR_TREND: usize = 3;
/// Sort key for entries without a release date; they go last.
const UNDATED_SORT_KEY: &str = "9999";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
    InsufficientData,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Trend::Improving => "improving",
            Trend::Declining => "declining",
            Trend::Stable => "stable",
            Trend::InsufficientData => "insufficient data",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FranchiseEntry {
    pub id: i64,
    pub title: String,
    pub year: Option<i32>,
    pub score: f64,
    pub grade: Grade,
    pub revenue: u64,
    pub budget: u64,
    /// Revenue minus budget, when the budget is known
    pub profit: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FranchiseReport {
    pub franchise: String,
    pub total_entries: usize,
    /// Entries in release order
    pub entries: Vec<FranchiseEntry>,
    pub average_score: f64,
    pub best_entry: FranchiseEntry,
    pub worst_entry: FranchiseEntry,
    pub trend: Trend,
    pub total_revenue: u64,
    pub total_budget: u64,
    /// Only reported when at least one budget is known
    pub total_profit: Option<i64>,
}

/// Compare the mean score of the later half of the entries with the earlier half.
pub fn detect_trend(scores: &[f64]) -> Trend {
    if scores.len() < MIN_ENTRIES_FOR_TREND {
        return Trend::InsufficientData;
    }

    let mid = scores.len() / 2;
    let mean = |s: &[f64]| s.iter().sum::<f64>() / s.len() as f64;
    let (first, second) = (mean(&scores[..mid]), mean(&scores[mid..]));

    if second > first + TREND_THRESHOLD {
        Trend::Improving
    } else if second < first - TREND_THRESHOLD {
        Trend::Declining
    } else {
        Trend::Stable
    }
}

/// Franchise report over already-scored entries, or `None` when empty.
pub fn franchise_report(name: &str, mut scored: Vec<ScoredMovie<'_>>) -> Option<FranchiseReport> {
    if scored.is_empty() {
        return None;
    }

    scored.sort_by(|a, b| release_key(a).cmp(release_key(b)));

    let entries: Vec<FranchiseEntry> = scored
        .iter()
        .map(|s| FranchiseEntry {
            id: s.movie.id,
            title: s.movie.title.clone(),
            year: s.movie.year(),
            score: s.breakdown.total_score,
            grade: s.breakdown.grade,
            revenue: s.movie.revenue,
            budget: s.movie.budget,
            profit: (s.movie.budget > 0).then(|| s.movie.profit()),
        })
        .collect();

    let scores: Vec<f64> = entries.iter().map(|e| e.score).collect();
    // earliest entry wins ties on both ends
    let best = entries
        .iter()
        .reduce(|best, e| if e.score > best.score { e } else { best })?;
    let worst = entries
        .iter()
        .reduce(|worst, e| if e.score < worst.score { e } else { worst })?;

    let total_revenue: u64 = entries.iter().map(|e| e.revenue).sum();
    let total_budget: u64 = entries.iter().map(|e| e.budget).sum();
    let total_profit = (total_budget > 0).then(|| total_revenue as i64 - total_budget as i64);

    Some(FranchiseReport {
        franchise: name.to_string(),
        total_entries: entries.len(),
        average_score: round2(scores.iter().sum::<f64>() / scores.len() as f64),
        best_entry: best.clone(),
        worst_entry: worst.clone(),
        trend: detect_trend(&scores),
        total_revenue,
        total_budget,
        total_profit,
        entries,
    })
}

fn release_key<'a>(scored: &'a ScoredMovie<'_>) -> &'a str {
    scored
        .movie
        .release_date
        .as_deref()
        .unwrap_or(UNDATED_SORT_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MovieRecord;
    use crate::scoring::ScoringEngine;

    #[test]
    fn test_detect_trend() {
        assert_eq!(detect_trend(&[70.0, 80.0]), Trend::InsufficientData);
        assert_eq!(detect_trend(&[60.0, 70.0, 75.0]), Trend::Improving);
        assert_eq!(detect_trend(&[80.0, 70.0, 60.0, 65.0]), Trend::Declining);
        assert_eq!(detect_trend(&[70.0, 71.0, 70.5]), Trend::Stable);
    }

    #[test]
    fn test_empty_franchise_has_no_report() {
        assert!(franchise_report("Nothing", Vec::new()).is_none());
    }

    #[test]
    fn test_entries_sorted_by_release_with_undated_last() {
        let mut undated = MovieRecord::new(3, "Undated");
        undated.vote_average = 5.0;
        let mut second = MovieRecord::new(2, "Second");
        second.release_date = Some("2005-05-19".into());
        second.vote_average = 6.0;
        second.budget = 100;
        second.revenue = 300;
        let mut first = MovieRecord::new(1, "First");
        first.release_date = Some("1999-05-19".into());
        first.vote_average = 8.0;

        let movies = [undated, second, first];
        let engine = ScoringEngine::default().with_reference_year(2025);
        let scored = movies.iter().map(|m| ScoredMovie::score(&engine, m)).collect();

        let report = franchise_report("Saga", scored).unwrap();
        let order: Vec<&str> = report.entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(order, vec!["First", "Second", "Undated"]);
        assert_eq!(report.best_entry.title, "First");
        assert_eq!(report.total_revenue, 300);
        assert_eq!(report.total_profit, Some(200));
        let profits: Vec<Option<i64>> = report.entries.iter().map(|e| e.profit).collect();
        assert_eq!(profits, vec![None, Some(200), None]);
        assert_eq!(report.trend, Trend::Declining);
    }

    #[test]
    fn test_profit_absent_without_budgets() {
        let movie = MovieRecord::new(1, "Solo");
        let engine = ScoringEngine::default().with_reference_year(2025);
        let report = franchise_report("Solo", vec![ScoredMovie::score(&engine, &movie)]).unwrap();
        assert_eq!(report.total_profit, None);
        assert_eq!(report.trend, Trend::InsufficientData);
        assert_eq!(report.best_entry, report.worst_entry);
    }
}
