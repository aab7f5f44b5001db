//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Domain values themselves are total (every setter accepts every value), so
/// failures only arise at the boundary where values are encoded or decoded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A serialized payload could not be encoded or decoded.
    #[error("invalid payload: {0}")]
    Payload(String),
}

impl DomainError {
    pub fn payload(msg: impl Into<String>) -> Self {
        Self::Payload(msg.into())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::payload(err.to_string())
    }
}
