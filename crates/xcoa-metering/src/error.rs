//! Error types for usage-ledger operations

use thiserror::Error;

/// Usage-ledger error types.
///
/// The ledger never retries or swallows failures; callers of the access
/// gate decide what a failed read or increment means for the request. For
/// metered paid features that decision is fail-closed.
#[derive(Debug, Error)]
pub enum MeteringError {
    /// The underlying usage store could not be read or written
    #[error("Usage store unavailable: {0}")]
    Store(String),

    /// A conditional update lost a concurrent race (optimistic backends
    /// only); the caller may retry the operation
    #[error("Usage counter was concurrently modified")]
    ConcurrentModification,

    /// A billing period string could not be parsed
    #[error("Invalid billing period: {0}")]
    InvalidPeriod(String),
}

/// Result type for usage-ledger operations.
pub type MeteringResult<T> = Result<T, MeteringError>;

impl MeteringError {
    /// Check if the operation may be retried by the caller.
    ///
    /// Only lost optimistic races are retryable; store outages and malformed
    /// input are not.
    pub fn is_retryable(&self) -> bool {
        matches!(self, MeteringError::ConcurrentModification)
    }
}
