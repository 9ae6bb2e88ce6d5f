pub mod movie;
pub mod refined;
pub mod types;

pub use movie::{parse_year, CastMember, MovieRecord};
pub use types::{
    DataConfidence, Feature, FeatureScore, Grade, ScoreBreakdown, ScoreCategory,
};
