//! # API Error Type
//!
//! Unified error type for viewer actions.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Viewer                             │
//! │                                                                         │
//! │  stdin line ──► serde_json ──► Action ──► CatalogStore                  │
//! │                     │                          │                        │
//! │                     ▼                          ▼                        │
//! │               BAD_REQUEST           StateError::NotInitialized          │
//! │                                     StateError::Invalid ...             │
//! │                     │                          │                        │
//! │                     └──────────► ApiError ◄────┘                        │
//! │                                     │                                   │
//! │                                     ▼                                   │
//! │              {"error":{"code":"...","message":"..."}}  on stdout        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use catalog_core::CoreError;
use catalog_state::StateError;
use serde::Serialize;

/// Error returned for a failed action.
///
/// ## Serialization
/// ```json
/// { "code": "NOT_INITIALIZED", "message": "Catalog has not been initialized" }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Read or mutation before initialize
    NotInitialized,

    /// Product data failed validation
    ValidationError,

    /// Dataset could not be read or parsed
    DatasetError,

    /// Bad flag or environment value
    ConfigError,

    /// Malformed action line or command-line arguments
    BadRequest,

    /// stdin/stdout failure
    IoError,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::BadRequest, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ConfigError, message)
    }
}

impl From<StateError> for ApiError {
    fn from(err: StateError) -> Self {
        match err {
            StateError::NotInitialized => ApiError::new(ErrorCode::NotInitialized, err.to_string()),
            StateError::DatasetRead { .. } | StateError::DatasetParse(_) => {
                tracing::error!(error = %err, "Dataset unavailable");
                ApiError::new(ErrorCode::DatasetError, err.to_string())
            }
            StateError::Invalid(core) => ApiError::from(core),
            StateError::Config { .. } => ApiError::config(err.to_string()),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        ApiError::new(ErrorCode::ValidationError, err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::bad_request(format!("Malformed action: {}", err))
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!(error = %err, "I/O error");
        ApiError::new(ErrorCode::IoError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
