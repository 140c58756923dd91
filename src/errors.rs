//! Unified application error type.
//! All modules (history, core, cli, utils) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // History file
    // ---------------------------
    #[error("History file error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed history record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    // ---------------------------
    // Input parsing
    // ---------------------------
    #[error("Invalid number: '{0}'")]
    InvalidNumber(String),

    #[error("Invalid airflow: {0}")]
    InvalidAirflow(String),

    #[error("Unknown console action: {0}")]
    UnknownAction(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
