//! Error types for the health advisor
//!
//! Configuration and remote-call failures are caught at the recommendation
//! seam and surfaced as text; shell invariants are reported to the caller.

use thiserror::Error;

/// Main error type for the health advisor
#[derive(Error, Debug)]
pub enum AdvisorError {
    /// Shell state machine transition errors
    #[error("Invalid state transition from {from} on {event}: {reason}")]
    InvalidTransition {
        from: String,
        event: String,
        reason: String,
    },

    /// A submission is already in flight
    #[error("A request is already in progress")]
    Busy,

    /// Form field lookup errors
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Value outside a fixed option list
    #[error("Invalid option '{value}' for {field} (expected one of: {options})")]
    InvalidOption {
        field: String,
        value: String,
        options: String,
    },

    /// Write attempted on an output pane outside of rendering
    #[error("Output pane is read-only")]
    ReadOnlyPane,

    /// Credential absent at start-up
    #[error("Missing API credential: {0}")]
    MissingCredential(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Non-success reply from the generation service
    #[error("API error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Reply carried no usable text
    #[error("Empty response from model: {0}")]
    EmptyResponse(String),

    /// HTTP client errors
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Timeout errors
    #[error("Request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// Generic errors with context
    #[error("{0}")]
    Generic(String),
}

/// Result type alias for advisor operations
pub type Result<T> = std::result::Result<T, AdvisorError>;

/// Convert anyhow errors to AdvisorError
impl From<anyhow::Error> for AdvisorError {
    fn from(err: anyhow::Error) -> Self {
        AdvisorError::Generic(err.to_string())
    }
}
