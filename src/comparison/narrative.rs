//! Verdict text, detailed analysis and chart series for a comparison.

use super::types::{ArgumentPoint, BarPoint, Confidence, Importance, RadarPoint, Side};
use crate::core::{FeatureScore, ScoreBreakdown};
use crate::scoring::normalizers::{round1, round2};

const MAX_LISTED_STRENGTHS: usize = 3;

/// One-sentence verdict (plus optional follow-ups) naming the winner.
pub fn verdict(
    breakdown1: &ScoreBreakdown,
    breakdown2: &ScoreBreakdown,
    winner: Side,
    confidence: Confidence,
) -> String {
    let (win, lose) = match winner {
        Side::Tie => {
            return format!(
                "{} and {} are remarkably evenly matched. They score {:.1} and {:.1} out of 100, \
                 making this comparison essentially a tie. Your personal preferences should guide \
                 your choice.",
                breakdown1.movie_title,
                breakdown2.movie_title,
                breakdown1.total_score,
                breakdown2.total_score
            );
        }
        Side::First => (breakdown1, breakdown2),
        Side::Second => (breakdown2, breakdown1),
    };

    let verb = match confidence {
        Confidence::Decisive => "decisively outperforms",
        Confidence::Clear => "clearly edges out",
        Confidence::Close | Confidence::VeryClose => "narrowly beats",
    };

    let mut text = format!(
        "{} {} {} with a score of {:.1} vs {:.1}.",
        win.movie_title, verb, lose.movie_title, win.total_score, lose.total_score
    );

    if let Some(feature) = biggest_advantage(win, lose) {
        text.push_str(&format!(
            " The biggest advantage is in {}.",
            feature.display_name.to_lowercase()
        ));
    }

    if confidence.is_close_call() {
        text.push_str(&format!(
            " However, this is a close call and {} has its own merits.",
            lose.movie_title
        ));
    }

    text
}

/// Winner's feature with the largest positive gap over the loser, if any.
fn biggest_advantage<'a>(
    winner: &'a ScoreBreakdown,
    loser: &ScoreBreakdown,
) -> Option<&'a FeatureScore> {
    winner
        .features
        .iter()
        .filter_map(|feat| {
            let other = loser.feature(feat.feature)?;
            let gap = feat.normalized_value - other.normalized_value;
            (gap > 0.0).then_some((feat, gap))
        })
        .fold(None, |best: Option<(&FeatureScore, f64)>, (feat, gap)| match best {
            Some((_, best_gap)) if best_gap >= gap => best,
            _ => Some((feat, gap)),
        })
        .map(|(feat, _)| feat)
}

/// Markdown analysis: overview, key differentiators and per-movie strengths.
pub fn detailed_analysis(
    breakdown1: &ScoreBreakdown,
    breakdown2: &ScoreBreakdown,
    arguments: &[ArgumentPoint],
) -> String {
    let title1 = &breakdown1.movie_title;
    let title2 = &breakdown2.movie_title;

    let mut lines = vec![
        format!("## Detailed Analysis: {title1} vs {title2}"),
        String::new(),
        "### Overview".to_string(),
        format!(
            "- **{title1}**: {} ({:.1}/100)",
            breakdown1.grade, breakdown1.total_score
        ),
        format!(
            "- **{title2}**: {} ({:.1}/100)",
            breakdown2.grade, breakdown2.total_score
        ),
        String::new(),
    ];

    let key: Vec<&ArgumentPoint> = arguments
        .iter()
        .filter(|a| a.importance == Importance::High)
        .collect();
    if !key.is_empty() {
        lines.push("### Key Differentiators".to_string());
        for arg in key {
            let marker = if arg.winner == Side::Tie { "=" } else { "*" };
            lines.push(format!("- {marker} **{}**: {}", arg.factor, arg.explanation));
        }
        lines.push(String::new());
    }

    lines.extend(strengths_section(title1, arguments, Side::First));
    lines.push(String::new());
    lines.extend(strengths_section(title2, arguments, Side::Second));

    lines.join("\n")
}

fn strengths_section(title: &str, arguments: &[ArgumentPoint], side: Side) -> Vec<String> {
    let mut lines = vec![format!("### Strengths of {title}")];

    let wins: Vec<String> = arguments
        .iter()
        .filter(|a| a.winner == side)
        .take(MAX_LISTED_STRENGTHS)
        .map(|a| {
            let value = match side {
                Side::Second => &a.movie2_value,
                _ => &a.movie1_value,
            };
            format!("- {}: {}", a.factor, value)
        })
        .collect();

    if wins.is_empty() {
        lines.push("- No clear advantages in this comparison".to_string());
    } else {
        lines.extend(wins);
    }
    lines
}

/// Paired normalized values per feature, in scoring order.
pub fn radar_series(breakdown1: &ScoreBreakdown, breakdown2: &ScoreBreakdown) -> Vec<RadarPoint> {
    paired_features(breakdown1, breakdown2)
        .map(|(f1, f2)| RadarPoint {
            feature: f1.display_name.clone(),
            movie1: round1(f1.normalized_value),
            movie2: round1(f2.normalized_value),
            difference: round1(f1.normalized_value - f2.normalized_value),
        })
        .collect()
}

/// Paired normalized and weighted values per feature, in scoring order.
pub fn bar_series(breakdown1: &ScoreBreakdown, breakdown2: &ScoreBreakdown) -> Vec<BarPoint> {
    paired_features(breakdown1, breakdown2)
        .map(|(f1, f2)| BarPoint {
            feature: f1.display_name.clone(),
            movie1_score: round1(f1.normalized_value),
            movie2_score: round1(f2.normalized_value),
            movie1_weighted: round2(f1.weighted_score),
            movie2_weighted: round2(f2.weighted_score),
            difference: round1(f1.normalized_value - f2.normalized_value),
        })
        .collect()
}

fn paired_features<'a>(
    breakdown1: &'a ScoreBreakdown,
    breakdown2: &'a ScoreBreakdown,
) -> impl Iterator<Item = (&'a FeatureScore, &'a FeatureScore)> {
    breakdown1
        .features
        .iter()
        .filter_map(move |f1| breakdown2.feature(f1.feature).map(|f2| (f1, f2)))
}
