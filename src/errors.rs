//! Unified application error type.
//! All modules (store, report, config, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Expected monthly file is missing, or the path is occupied by
    /// something that is not a regular file.
    #[error("Not found: {0}")]
    NotFound(String),

    // ---------------------------
    // Persisted data
    // ---------------------------
    #[error("Malformed data in {path}: {reason}")]
    MalformedData { path: String, reason: String },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Invalid date/time: {0}")]
    InvalidDateTime(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

pub type AppResult<T> = Result<T, AppError>;
