pub mod comparator;
pub mod narrative;
pub mod types;

pub use comparator::{classify_importance, classify_outcome, MovieComparator};
pub use types::{
    ArgumentPoint, BarPoint, ComparisonResult, Confidence, Importance, RadarPoint, Side,
};
