//! Human-readable explanations attached to each feature score.

use crate::core::{CastMember, MovieRecord};

/// Format an integer with thousands separators (`12000` -> `12,000`).
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a dollar amount in whole millions (`$1,234M`).
pub fn format_millions(amount: f64) -> String {
    let millions = (amount / 1_000_000.0).round();
    if millions < 0.0 {
        format!("-${}M", format_thousands(millions.abs() as u64))
    } else {
        format!("${}M", format_thousands(millions as u64))
    }
}

/// `118` -> `1h 58m`
pub fn format_runtime(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

pub fn explain_vote_average(rating: f64) -> String {
    if rating >= 8.0 {
        format!("Exceptional rating of {rating:.1}/10 - among the highest rated films")
    } else if rating >= 7.0 {
        format!("Strong rating of {rating:.1}/10 - well above average")
    } else if rating >= 6.0 {
        format!("Solid rating of {rating:.1}/10 - generally positive reception")
    } else if rating >= 5.0 {
        format!("Mixed rating of {rating:.1}/10 - polarizing opinions")
    } else {
        format!("Low rating of {rating:.1}/10 - predominantly negative reception")
    }
}

pub fn explain_vote_count(count: u64) -> String {
    let formatted = format_thousands(count);
    if count >= 10_000 {
        format!("{formatted} votes - highly reliable rating with massive sample size")
    } else if count >= 5_000 {
        format!("{formatted} votes - reliable rating with large sample")
    } else if count >= 1_000 {
        format!("{formatted} votes - reasonably reliable rating")
    } else if count >= 100 {
        format!("{formatted} votes - limited sample, rating may fluctuate")
    } else {
        format!("Only {count} votes - insufficient data for reliable rating")
    }
}

pub fn explain_popularity(popularity: f64) -> String {
    if popularity >= 100.0 {
        format!("Extremely high popularity ({popularity:.1}) - major cultural phenomenon")
    } else if popularity >= 50.0 {
        format!("Very popular ({popularity:.1}) - significant audience interest")
    } else if popularity >= 20.0 {
        format!("Moderately popular ({popularity:.1}) - solid audience awareness")
    } else if popularity >= 5.0 {
        format!("Low popularity ({popularity:.1}) - limited mainstream awareness")
    } else {
        format!("Very low popularity ({popularity:.1}) - niche or unknown")
    }
}

pub fn explain_revenue(movie: &MovieRecord) -> String {
    let revenue = movie.revenue;
    if revenue == 0 {
        return "Box office data unavailable".to_string();
    }

    let gross = format_millions(revenue as f64);

    if let Some(roi) = movie.roi() {
        let spend = format_millions(movie.budget as f64);
        let verdict = if roi >= 200.0 {
            "massive financial success"
        } else if roi >= 100.0 {
            "profitable"
        } else if roi >= 0.0 {
            "modest profit"
        } else {
            "financial loss"
        };
        format!("{gross} on {spend} budget - {verdict} ({roi:.0}% ROI)")
    } else {
        let millions = revenue as f64 / 1_000_000.0;
        if millions >= 1000.0 {
            format!("{gross} - blockbuster box office")
        } else if millions >= 100.0 {
            format!("{gross} - solid box office performance")
        } else {
            format!("{gross} box office")
        }
    }
}

pub fn explain_runtime(runtime: Option<u32>) -> String {
    let Some(minutes) = runtime.filter(|&m| m > 0) else {
        return "Runtime information unavailable".to_string();
    };

    let length = format_runtime(minutes);
    if (90..=150).contains(&minutes) {
        format!("{length} - optimal length for engaging storytelling")
    } else if minutes < 90 {
        format!("{length} - shorter than typical, may feel rushed")
    } else if minutes <= 180 {
        format!("{length} - longer runtime requiring strong pacing")
    } else {
        format!("{length} - epic length, demands viewer commitment")
    }
}

pub fn explain_recency(year: Option<i32>, reference_year: i32) -> String {
    let Some(year) = year else {
        return "Release date unknown".to_string();
    };

    let age = reference_year - year;
    if age <= 1 {
        format!("Released in {year} - brand new release")
    } else if age <= 5 {
        format!("Released in {year} - recent film ({age} years old)")
    } else if age <= 10 {
        format!("Released in {year} - modern film ({age} years old)")
    } else if age <= 20 {
        format!("Released in {year} - established film ({age} years old)")
    } else {
        format!("Released in {year} - classic film ({age} years old)")
    }
}

pub fn explain_star_power(cast: &[CastMember]) -> String {
    if cast.is_empty() {
        return "Cast information unavailable".to_string();
    }

    let top_names: Vec<&str> = cast
        .iter()
        .take(3)
        .filter(|c| c.popularity > 10.0)
        .map(|c| c.name.as_str())
        .collect();

    if top_names.is_empty() {
        return "Cast without major star recognition".to_string();
    }

    let billed: Vec<f64> = cast.iter().take(5).map(|c| c.popularity).collect();
    let average = billed.iter().sum::<f64>() / billed.len() as f64;
    let names = top_names.join(", ");

    if average > 50.0 {
        format!("A-list cast featuring {names}")
    } else if average > 20.0 {
        format!("Well-known cast including {names}")
    } else {
        format!("Cast includes {names}")
    }
}
