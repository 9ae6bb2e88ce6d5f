use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::MovieRecord;
use crate::scoring::normalizers::{round1, round2};

/// Rating gap (on the 0-10 scale) beyond which audiences and critics disagree.
const DIVERGENCE_THRESHOLD: f64 = 1.5;

/// Typical critic offset from the audience rating, per genre.
const CRITIC_GENRE_OFFSETS: [(&str, f64); 6] = [
    ("Documentary", 0.3),
    ("Drama", 0.2),
    ("Animation", 0.1),
    ("Horror", -0.4),
    ("Comedy", -0.2),
    ("Action", -0.3),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DivergenceCategory {
    AudienceFavorite,
    CriticFavorite,
    Consensus,
}

impl DivergenceCategory {
    pub fn classify(divergence: f64) -> Self {
        if divergence > DIVERGENCE_THRESHOLD {
            DivergenceCategory::AudienceFavorite
        } else if divergence < -DIVERGENCE_THRESHOLD {
            DivergenceCategory::CriticFavorite
        } else {
            DivergenceCategory::Consensus
        }
    }

    pub fn insight(self) -> &'static str {
        match self {
            DivergenceCategory::AudienceFavorite => {
                "This film resonates strongly with general audiences, possibly due to \
                 entertainment value or emotional impact that critics may undervalue."
            }
            DivergenceCategory::CriticFavorite => {
                "This film showcases qualities that critics appreciate (artistic merit, \
                 innovation, performances) but may be too challenging or niche for \
                 mainstream audiences."
            }
            DivergenceCategory::Consensus => {
                "Both critics and audiences see similar value in this film, suggesting \
                 broad appeal and consistent quality."
            }
        }
    }
}

impl fmt::Display for DivergenceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DivergenceCategory::AudienceFavorite => "audience favorite",
            DivergenceCategory::CriticFavorite => "critic favorite",
            DivergenceCategory::Consensus => "consensus",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Divergence {
    pub audience_score: f64,
    pub critic_score: f64,
    /// True when no critic score was supplied and one was estimated
    pub critic_score_estimated: bool,
    /// Audience minus critic
    pub divergence: f64,
    pub category: DivergenceCategory,
    pub explanation: String,
    pub insight: String,
}

/// Estimate a critic score by shifting the audience rating by the mean genre offset.
pub fn estimate_critic_score(movie: &MovieRecord) -> f64 {
    if movie.genres.is_empty() {
        return movie.vote_average;
    }

    let total: f64 = movie
        .genres
        .iter()
        .map(|genre| {
            CRITIC_GENRE_OFFSETS
                .iter()
                .find(|(name, _)| name == genre)
                .map_or(0.0, |(_, offset)| *offset)
        })
        .sum();

    movie.vote_average + total / movie.genres.len() as f64
}

pub fn audience_critic_divergence(movie: &MovieRecord, critic_score: Option<f64>) -> Divergence {
    let audience = movie.vote_average;
    let (critic, estimated) = match critic_score {
        Some(score) => (score, false),
        None => (estimate_critic_score(movie), true),
    };

    let divergence = audience - critic;
    let category = DivergenceCategory::classify(divergence);
    let title = &movie.title;
    let explanation = match category {
        DivergenceCategory::AudienceFavorite => {
            format!("Audiences love {title} more than critics")
        }
        DivergenceCategory::CriticFavorite => {
            format!("Critics appreciate {title} more than general audiences")
        }
        DivergenceCategory::Consensus => {
            format!("Audiences and critics generally agree on {title}")
        }
    };

    Divergence {
        audience_score: audience,
        critic_score: round1(critic),
        critic_score_estimated: estimated,
        divergence: round2(divergence),
        category,
        explanation,
        insight: category.insight().to_string(),
    }
}
