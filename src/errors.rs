//! Unified application error type.
//! All modules (db, core, cli, config) return AppError so that the
//! dispatcher in `main` is the only place deciding the exit status.

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
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Error reading duration: '{0}' is not a whole number of minutes")]
    InvalidDuration(String),

    #[error("Duration: {value} must be in range 1 - {max}")]
    DurationOutOfRange { value: i64, max: i64 },

    #[error("Duration: {0} must be greater than 0")]
    NonPositiveDuration(i64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
