//! Error types for the DNS provider abstraction
//!
//! Every backend reports failures through this single taxonomy so callers
//! observe the same errors no matter which provider sits behind the traits.

use thiserror::Error;

/// Result type alias for DNS provider operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for DNS provider operations
#[derive(Error, Debug)]
pub enum Error {
    /// A capability was forced on a backend that does not implement it
    #[error("Unsupported capability: {0}")]
    Unsupported(String),

    /// Zone creation collided with an existing backend identifier
    #[error("Zone already exists: {0}")]
    AlreadyExists(String),

    /// Record set addition collided with an existing (name, type) key
    #[error("Duplicate record set: {0}")]
    DuplicateRecord(String),

    /// Removal targeted a (name, type) key absent from the zone
    #[error("Not found: {0}")]
    NotFound(String),

    /// Transport or storage failure in a real backend
    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A backend broke the provider contract during a conformance run
    #[error("Contract violation: {0}")]
    ContractViolation(String),

    /// I/O errors (reading configuration)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an unsupported capability error
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }

    /// Create a zone collision error
    pub fn already_exists(msg: impl Into<String>) -> Self {
        Self::AlreadyExists(msg.into())
    }

    /// Create a duplicate record set error
    pub fn duplicate_record(msg: impl Into<String>) -> Self {
        Self::DuplicateRecord(msg.into())
    }

    /// Create a "not found" error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a backend unavailable error
    pub fn backend_unavailable(msg: impl Into<String>) -> Self {
        Self::BackendUnavailable(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a contract violation error
    pub fn contract_violation(msg: impl Into<String>) -> Self {
        Self::ContractViolation(msg.into())
    }
}

/// Helper for converting anyhow::Error to our Error type
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}
