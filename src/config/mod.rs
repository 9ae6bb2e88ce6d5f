// Sub-modules
mod core;
mod loader;
pub mod reference;
mod scoring;

// Re-export scoring types
pub use scoring::{
    default_cast_star_power_weight, default_popularity_weight, default_release_recency_weight,
    default_revenue_weight, default_runtime_quality_weight, default_vote_average_weight,
    default_vote_count_weight, RecencyMode, ScoringOptions, WeightConfig, DEFAULT_WEIGHTS,
};

// Re-export reference tables
pub use reference::{EraStats, ReferenceTables};

// Re-export core types
pub use core::{CinescoreConfig, OutputConfig, DEFAULT_CONFIG_TEMPLATE};

// Re-export loading functions
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
