use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::MovieRecord;
use crate::scoring::normalizers::round2;

/// Billed cast members considered for star power and notable actors.
const CAST_ANALYSIS_DEPTH: usize = 10;
/// Popularity above which an actor counts toward cast depth.
const DEPTH_POPULARITY: f64 = 10.0;
/// Popularity above which an actor is listed as notable.
const NOTABLE_POPULARITY: f64 = 5.0;
const DEPTH_POINTS_PER_ACTOR: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerLevel {
    Exceptional,
    Strong,
    Moderate,
    Limited,
}

impl PowerLevel {
    pub fn from_total(total_star_power: f64) -> Self {
        if total_star_power > 200.0 {
            PowerLevel::Exceptional
        } else if total_star_power > 100.0 {
            PowerLevel::Strong
        } else if total_star_power > 50.0 {
            PowerLevel::Moderate
        } else {
            PowerLevel::Limited
        }
    }
}

impl fmt::Display for PowerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PowerLevel::Exceptional => "exceptional",
            PowerLevel::Strong => "strong",
            PowerLevel::Moderate => "moderate",
            PowerLevel::Limited => "limited",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotableActor {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character: Option<String>,
    pub popularity: f64,
    /// 1-based billing position
    pub rank: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastAnalysis {
    pub movie_id: i64,
    pub movie_title: String,
    pub total_star_power: f64,
    pub average_cast_popularity: f64,
    pub top_billed_popularity: f64,
    pub cast_depth_score: f64,
    pub power_level: PowerLevel,
    pub notable_actors: Vec<NotableActor>,
    pub analysis_text: String,
}

pub fn analyze_cast(movie: &MovieRecord) -> CastAnalysis {
    let Some(lead) = movie.cast.first() else {
        return CastAnalysis {
            movie_id: movie.id,
            movie_title: movie.title.clone(),
            total_star_power: 0.0,
            average_cast_popularity: 0.0,
            top_billed_popularity: 0.0,
            cast_depth_score: 0.0,
            power_level: PowerLevel::Limited,
            notable_actors: Vec::new(),
            analysis_text: "No cast information available.".to_string(),
        };
    };

    let popularities = movie.cast_popularities();
    let total: f64 = popularities.iter().take(CAST_ANALYSIS_DEPTH).sum();
    let average = popularities.iter().sum::<f64>() / popularities.len() as f64;
    let notable_count = popularities.iter().filter(|&&p| p > DEPTH_POPULARITY).count();
    let depth = (notable_count as f64 * DEPTH_POINTS_PER_ACTOR).min(100.0);
    let power_level = PowerLevel::from_total(total);

    let notable_actors = movie
        .cast
        .iter()
        .take(CAST_ANALYSIS_DEPTH)
        .enumerate()
        .filter(|(_, member)| member.popularity > NOTABLE_POPULARITY)
        .map(|(i, member)| NotableActor {
            name: member.name.clone(),
            character: member.character.clone(),
            popularity: member.popularity,
            rank: i + 1,
        })
        .collect();

    let analysis_text = format!(
        "{} features a cast with {} star power. Led by {} ({:.1} popularity), the film has {} \
         notable actors in its cast. The average cast popularity is {:.1}.",
        movie.title, power_level, lead.name, lead.popularity, notable_count, average
    );

    CastAnalysis {
        movie_id: movie.id,
        movie_title: movie.title.clone(),
        total_star_power: round2(total),
        average_cast_popularity: round2(average),
        top_billed_popularity: round2(lead.popularity),
        cast_depth_score: round2(depth),
        power_level,
        notable_actors,
        analysis_text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CastMember;

    #[test]
    fn test_empty_cast() {
        let analysis = analyze_cast(&MovieRecord::new(7, "Silent"));
        assert_eq!(analysis.total_star_power, 0.0);
        assert!(analysis.notable_actors.is_empty());
        assert_eq!(analysis.analysis_text, "No cast information available.");
    }

    #[test]
    fn test_cast_metrics() {
        let mut movie = MovieRecord::new(7, "Heat");
        movie.cast = vec![
            CastMember::new("Al", 60.0),
            CastMember::new("Robert", 50.0),
            CastMember::new("Val", 12.0),
            CastMember::new("Extra", 2.0),
        ];

        let analysis = analyze_cast(&movie);
        assert_eq!(analysis.total_star_power, 124.0);
        assert_eq!(analysis.average_cast_popularity, 31.0);
        assert_eq!(analysis.top_billed_popularity, 60.0);
        assert_eq!(analysis.cast_depth_score, 45.0);
        assert_eq!(analysis.power_level, PowerLevel::Strong);
        assert_eq!(analysis.notable_actors.len(), 3);
        assert_eq!(analysis.notable_actors[2].rank, 3);
        assert_eq!(
            analysis.analysis_text,
            "Heat features a cast with strong star power. Led by Al (60.0 popularity), \
             the film has 3 notable actors in its cast. The average cast popularity is 31.0."
        );
    }

    #[test]
    fn test_depth_is_capped() {
        let mut movie = MovieRecord::new(8, "Ensemble");
        movie.cast = (0..12).map(|i| CastMember::new(format!("Star {i}"), 30.0)).collect();
        let analysis = analyze_cast(&movie);
        assert_eq!(analysis.cast_depth_score, 100.0);
        // only the first ten count toward star power and notables
        assert_eq!(analysis.total_star_power, 300.0);
        assert_eq!(analysis.notable_actors.len(), 10);
        assert_eq!(analysis.power_level, PowerLevel::Exceptional);
    }
}
