pub mod input;
pub mod output;
pub mod writers;

pub use input::{load_movie, load_movies, parse_movies};
pub use output::{create_writer, AnalysisReport, OutputFormat, OutputWriter};

use crate::errors::{CinescoreError, Result};
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| CinescoreError::from_io(&e, path))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| CinescoreError::from_io(&e, path))
}

pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}
