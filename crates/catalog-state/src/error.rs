//! # State Errors
//!
//! Errors raised around the catalog rather than inside it: lifecycle misuse,
//! dataset ingestion and configuration. The transitions themselves never
//! fail.

use std::path::PathBuf;

use catalog_core::{CoreError, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StateError {
    /// The manager was read or mutated before `initialize` ran (or after
    /// `shutdown`).
    #[error("Catalog has not been initialized")]
    NotInitialized,

    #[error("Failed to read dataset {}: {source}", path.display())]
    DatasetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse dataset: {0}")]
    DatasetParse(#[from] serde_json::Error),

    #[error("Invalid catalog data: {0}")]
    Invalid(#[from] CoreError),

    #[error("Invalid configuration for {key}: {reason}")]
    Config { key: String, reason: String },
}

impl From<ValidationError> for StateError {
    fn from(err: ValidationError) -> Self {
        StateError::Invalid(CoreError::Validation(err))
    }
}

pub type StateResult<T> = Result<T, StateError>;
