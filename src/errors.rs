//! Unified application error type.
//! Loader, reports, session and CLI all return AppError so the error
//! handling stays consistent from the CSV reader up to main().

use std::io;
use thiserror::Error;

/// Failures tied to the trip data itself: the backing file for a city,
/// its shape, or an aggregate asked of an empty selection.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Data source for {city} is unavailable ({path}): {reason}")]
    SourceUnavailable {
        city: String,
        path: String,
        reason: String,
    },

    #[error("Required column '{0}' is missing from the data source")]
    MissingColumn(String),

    #[error("Malformed record at row {row}: {reason}")]
    Malformed { row: usize, reason: String },

    #[error("Total trip duration does not fit in a 64-bit seconds counter")]
    DurationOverflow,

    #[error("No trips match this filter combination")]
    EmptyDataset,
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Data
    // ---------------------------
    #[error(transparent)]
    Data(#[from] DataError),

    // ---------------------------
    // Parsing / validation
    // ---------------------------
    #[error("Invalid input: {0}")]
    Validation(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Output
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// True when the error only means the current filter selected no trips.
    pub fn is_empty_dataset(&self) -> bool {
        matches!(self, AppError::Data(DataError::EmptyDataset))
    }
}

pub type AppResult<T> = Result<T, AppError>;
