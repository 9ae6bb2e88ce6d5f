//! Error types for the cinescore boundary.
//!
//! The scoring core is total and never fails; errors only arise where data
//! enters the system: reading movie records and configuration from disk,
//! validating them, and constructing weight configurations.
//!
//! # Error Codes
//!
//! Error codes are assigned by category:
//! - E001-E009: I/O and filesystem errors
//! - E010-E019: Parse errors
//! - E020-E029: Configuration errors
//! - E040-E049: Lookup errors
//! - E050-E059: Validation errors
//!
//! # Example
//!
//! ```rust
//! use cinescore::errors::{CinescoreError, ErrorCode};
//!
//! let err = CinescoreError::validation("vote_average must be in range [0.0, 10.0]");
//! assert_eq!(err.code(), ErrorCode::VALIDATION_GENERIC);
//! assert!(err.is_user_fixable());
//! ```

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Structured error code for documentation and programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ErrorCode(&'static str);

impl ErrorCode {
    /// I/O error - file not found
    pub const IO_FILE_NOT_FOUND: ErrorCode = ErrorCode("E001");
    /// I/O error - generic
    pub const IO_GENERIC: ErrorCode = ErrorCode("E009");

    /// Parse error - malformed movie record
    pub const PARSE_MOVIE: ErrorCode = ErrorCode("E010");
    /// Parse error - generic
    pub const PARSE_GENERIC: ErrorCode = ErrorCode("E019");

    /// Config error - invalid value
    pub const CONFIG_INVALID: ErrorCode = ErrorCode("E020");
    /// Config error - file not found
    pub const CONFIG_FILE_NOT_FOUND: ErrorCode = ErrorCode("E022");

    /// Lookup error - nothing to analyze
    pub const NOT_FOUND: ErrorCode = ErrorCode("E040");

    /// Validation error - generic
    pub const VALIDATION_GENERIC: ErrorCode = ErrorCode("E050");
    /// Validation error - weight outside [0, 1]
    pub const VALIDATION_WEIGHT: ErrorCode = ErrorCode("E051");

    /// Get the error code string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors raised while bringing data into the scoring core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CinescoreError {
    /// File system I/O errors.
    #[error("[{code}] I/O error: {message}{}", fmt_path(.path))]
    Io {
        code: ErrorCode,
        message: String,
        path: Option<PathBuf>,
    },

    /// Malformed JSON or TOML input.
    #[error("[{code}] Parse error: {message}{}", fmt_path(.path))]
    Parse {
        code: ErrorCode,
        message: String,
        path: Option<PathBuf>,
    },

    /// Configuration file issues.
    #[error("[{code}] Configuration error: {message}{}", fmt_path(.path))]
    Config {
        code: ErrorCode,
        message: String,
        path: Option<PathBuf>,
    },

    /// Input outside the documented domain of the scoring core.
    #[error("[{code}] Validation error: {message}")]
    Validation { code: ErrorCode, message: String },

    /// Nothing to operate on (e.g. an empty franchise).
    #[error("[{code}] Not found: {message}")]
    NotFound { code: ErrorCode, message: String },
}

fn fmt_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" ({})", p.display()))
        .unwrap_or_default()
}

impl CinescoreError {
    /// Create an I/O error.
    pub fn io(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Io {
            code: ErrorCode::IO_GENERIC,
            message: message.into(),
            path,
        }
    }

    /// Create an I/O error from a `std::io::Error`, classifying missing files.
    pub fn from_io(error: &std::io::Error, path: impl Into<PathBuf>) -> Self {
        let code = if error.kind() == std::io::ErrorKind::NotFound {
            ErrorCode::IO_FILE_NOT_FOUND
        } else {
            ErrorCode::IO_GENERIC
        };
        Self::Io {
            code,
            message: error.to_string(),
            path: Some(path.into()),
        }
    }

    /// Create a parse error for a movie record.
    pub fn parse(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Parse {
            code: ErrorCode::PARSE_MOVIE,
            message: message.into(),
            path,
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Config {
            code: ErrorCode::CONFIG_INVALID,
            message: message.into(),
            path,
        }
    }

    /// Create a generic validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            code: ErrorCode::VALIDATION_GENERIC,
            message: message.into(),
        }
    }

    /// Create a validation error for a named weight.
    pub fn invalid_weight(name: &str, value: f64) -> Self {
        Self::Validation {
            code: ErrorCode::VALIDATION_WEIGHT,
            message: format!("{} weight must be between 0.0 and 1.0 (got {})", name, value),
        }
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            code: ErrorCode::NOT_FOUND,
            message: message.into(),
        }
    }

    /// Get the structured error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Io { code, .. }
            | Self::Parse { code, .. }
            | Self::Config { code, .. }
            | Self::Validation { code, .. }
            | Self::NotFound { code, .. } => *code,
        }
    }

    /// Whether the user can fix this by editing their input or config.
    pub fn is_user_fixable(&self) -> bool {
        match self {
            Self::Io { code, .. } => *code == ErrorCode::IO_FILE_NOT_FOUND,
            Self::Parse { .. } | Self::Config { .. } | Self::Validation { .. } => true,
            Self::NotFound { .. } => true,
        }
    }
}

pub type Result<T> = std::result::Result<T, CinescoreError>;
