mod common;

use cinescore::commands::{init::init_config_in, CommandContext};
use cinescore::config::{
    discover_config, load_config_from, CinescoreConfig, RecencyMode, DEFAULT_WEIGHTS,
};
use cinescore::core::Feature;
use cinescore::errors::ErrorCode;
use cinescore::io::OutputFormat;
use cinescore::ScoringEngine;
use common::golden_movie;
use indoc::indoc;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(".cinescore.toml");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_full_config_drives_the_engine() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        indoc! {r#"
            [weights]
            vote_average = 1.0
            vote_count = 0.0
            popularity = 0.0
            revenue = 0.0
            runtime_quality = 0.0
            release_recency = 0.0
            cast_star_power = 0.0

            [scoring]
            recency_mode = "favor_recent"
            reference_year = 2025

            [output]
            default_format = "markdown"
        "#},
    );

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.scoring.recency_mode, RecencyMode::FavorRecent);
    assert_eq!(config.scoring.reference_year, Some(2025));

    let engine = ScoringEngine::from_config(&config);
    assert_eq!(engine.reference_year(), 2025);
    assert_eq!(engine.weights().weight_for(Feature::VoteAverage), 1.0);
    assert_eq!(engine.score(&golden_movie()).total_score, 89.5);

    let ctx = CommandContext::new(config, None, None);
    assert_eq!(ctx.format, OutputFormat::Markdown);
}

#[test]
fn test_flag_format_beats_config_format() {
    let mut config = CinescoreConfig::default();
    config.output = Some(cinescore::config::OutputConfig {
        default_format: Some("json".to_string()),
    });

    let ctx = CommandContext::new(config.clone(), Some(OutputFormat::Terminal), None);
    assert_eq!(ctx.format, OutputFormat::Terminal);

    let ctx = CommandContext::new(config, None, None);
    assert_eq!(ctx.format, OutputFormat::Json);

    let ctx = CommandContext::new(CinescoreConfig::default(), None, None);
    assert_eq!(ctx.format, OutputFormat::Terminal);
}

#[test]
fn test_reference_tables_override_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        indoc! {r#"
            [reference.genre_baselines]
            Drama = 80

            [reference.era_stats]
            "2010" = { mean = 70, std = 5 }
        "#},
    );

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.reference.genre_baseline("Drama"), Some(80.0));
    let era = config.reference.era(2010).unwrap();
    assert_eq!(era.mean, 70.0);
    assert_eq!(era.std, 5.0);
}

#[test]
fn test_out_of_range_weights_fall_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        indoc! {r#"
            [weights]
            vote_average = 1.5
        "#},
    );

    let config = load_config_from(&path).unwrap();
    assert!(config.weights.is_none());
    assert_eq!(config.weights(), DEFAULT_WEIGHTS);
}

#[test]
fn test_malformed_explicit_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[weights\nvote_average = ");

    let err = load_config_from(&path).unwrap_err();
    assert_eq!(err.code(), ErrorCode::CONFIG_INVALID);
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = load_config_from(&dir.path().join("absent.toml")).unwrap_err();
    assert_eq!(err.code(), ErrorCode::CONFIG_FILE_NOT_FOUND);
    assert!(err.is_user_fixable());
}

#[test]
fn test_discovery_walks_up_from_nested_directories() {
    let dir = TempDir::new().unwrap();
    write_config(
        &dir,
        indoc! {r#"
            [scoring]
            reference_year = 1999
        "#},
    );
    let nested = dir.path().join("catalog").join("2024");
    fs::create_dir_all(&nested).unwrap();

    let config = discover_config(nested);
    assert_eq!(config.scoring.reference_year, Some(1999));
}

#[test]
fn test_init_template_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = init_config_in(dir.path(), false).unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.weights(), DEFAULT_WEIGHTS);
    assert_eq!(config.scoring.recency_mode, RecencyMode::Neutral);
    assert_eq!(config.reference.genre_baseline("Science Fiction"), Some(65.0));
    assert!(init_config_in(dir.path(), false).is_err());
}
