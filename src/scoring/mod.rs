pub mod engine;
pub mod explanations;
pub mod normalizers;

pub use engine::{current_year, ScoringEngine};
pub use normalizers::{data_confidence, score_to_grade};
