use thiserror::Error;

/// Errors raised by infrastructure adapters.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    /// An event could not be turned into an envelope payload.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A port rejected the operation with a domain error.
    #[error("Domain error: {0}")]
    Domain(#[from] common::Error),

    /// The global tracing subscriber could not be installed.
    #[error("Telemetry error: {0}")]
    Telemetry(String),
}

/// Result type for infrastructure operations.
pub type Result<T> = std::result::Result<T, InfrastructureError>;
