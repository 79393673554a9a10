//! Unified application error type.
//! All modules (store, core, cli, utils) return AppError to keep the error
//! handling consistent. Input-validation variants are recovered locally by the
//! interactive loops; everything else bubbles up to `main`.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Input closed")]
    InputClosed,

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid row {row} in data file: {reason}")]
    InvalidRow { row: usize, reason: String },

    // ---------------------------
    // User input
    // ---------------------------
    #[error("Invalid date format: {0} (use MM/DD/YYYY)")]
    InvalidDate(String),

    #[error("The end date {end} must not be earlier than {start}")]
    InvalidDateRange { start: String, end: String },

    #[error("Invalid minutes: {0} (must be a number greater than zero)")]
    InvalidMinutes(String),

    #[error("Improper regex format: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("The task name cannot be blank")]
    EmptyTaskName,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Backup errors
    // ---------------------------
    #[error("Backup error: {0}")]
    Backup(String),
}

impl AppError {
    /// True for errors caused by a malformed answer at a prompt.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AppError::InvalidDate(_)
                | AppError::InvalidDateRange { .. }
                | AppError::InvalidMinutes(_)
                | AppError::InvalidPattern(_)
                | AppError::EmptyTaskName
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
