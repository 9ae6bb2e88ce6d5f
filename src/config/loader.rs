use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::CinescoreConfig;
use crate::errors::{CinescoreError, ErrorCode, Result};

pub const CONFIG_FILE_NAME: &str = ".cinescore.toml";

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
///
/// Invalid weights are replaced by the defaults with a warning rather than
/// failing the whole load.
pub fn parse_and_validate_config(contents: &str) -> std::result::Result<CinescoreConfig, String> {
    let mut config = toml::from_str::<CinescoreConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    if let Some(weights) = config.weights {
        if let Err(e) = weights.validate() {
            log::warn!("Invalid scoring weights: {}. Using defaults.", e);
            config.weights = None;
        }
    }

    Ok(config)
}

/// Pure function to try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<CinescoreConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Load an explicitly requested config file. Unlike discovery, a missing or
/// malformed file is an error.
pub fn load_config_from(path: &Path) -> Result<CinescoreConfig> {
    let contents = read_config_file(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CinescoreError::Config {
                code: ErrorCode::CONFIG_FILE_NOT_FOUND,
                message: "config file not found".to_string(),
                path: Some(path.to_path_buf()),
            }
        } else {
            CinescoreError::from_io(&e, path)
        }
    })?;

    parse_and_validate_config(&contents)
        .map_err(|message| CinescoreError::config(message, Some(path.to_path_buf())))
}

/// Search for `.cinescore.toml` from `start` upwards.
pub fn discover_config(start: PathBuf) -> CinescoreConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            CinescoreConfig::default()
        })
}

pub fn load_config() -> CinescoreConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            CinescoreConfig::default()
        }
    }
}
