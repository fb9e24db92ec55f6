//! Unified application error type.
//! Engine, import, export and CLI code all return AppError so callers
//! see one consistent taxonomy.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing / validation
    // ---------------------------
    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    /// A malformed event; `index` is its position in the caller's input.
    #[error("Invalid interval for event #{index} ('{id}'): {reason}")]
    InvalidInterval {
        index: usize,
        id: String,
        reason: String,
    },

    #[error("{0} invalid event(s) found")]
    ValidationFailed(usize),

    #[error("Unsupported input file: {0} (expected .json, .yaml, .yml or .csv)")]
    UnsupportedInput(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Output errors
    // ---------------------------
    #[error("Output file already exists: {0} (use --force to overwrite)")]
    OutputExists(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    pub fn invalid_interval(index: usize, id: &str, reason: impl Into<String>) -> Self {
        AppError::InvalidInterval {
            index,
            id: id.to_string(),
            reason: reason.into(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
