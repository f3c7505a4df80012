//! Error types for feature-access operations
//!
//! This module defines all error types that can occur while resolving a
//! user's plan, reading the usage ledger, and evaluating an access check.

use thiserror::Error;
use xcoa_metering::MeteringError;

/// Feature-access error types.
///
/// Access checks fail closed: any of these errors means the gated action
/// must be denied, never granted by default. Quota exhaustion itself is
/// not an error; it is an `allowed = false` decision.
#[derive(Debug, Error)]
pub enum AccessError {
    /// Caller supplied a feature key outside the plan schema.
    ///
    /// This is a programming error at the call site (or a malformed query
    /// at the HTTP boundary); it should be surfaced, not silently ignored.
    #[error("Unknown feature key: {0}")]
    UnknownFeature(String),

    /// The subscription collaborator could not resolve the user's plan
    #[error("Subscription lookup failed: {0}")]
    Subscription(String),

    /// The usage ledger could not be read or written
    #[error(transparent)]
    Metering(#[from] MeteringError),
}

/// Result type for feature-access operations.
pub type AccessResult<T> = Result<T, AccessError>;

impl AccessError {
    /// Check if this error should be logged at error level.
    ///
    /// A bad feature key is caller misuse; the rest are infrastructure
    /// failures.
    pub fn is_server_error(&self) -> bool {
        !matches!(self, AccessError::UnknownFeature(_))
    }

    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            AccessError::UnknownFeature(_) => 400,
            AccessError::Subscription(_) => 502,
            AccessError::Metering(MeteringError::ConcurrentModification) => 409,
            AccessError::Metering(_) => 500,
        }
    }

    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            AccessError::UnknownFeature(_) => "UNKNOWN_FEATURE",
            AccessError::Subscription(_) => "SUBSCRIPTION_LOOKUP_FAILED",
            AccessError::Metering(MeteringError::ConcurrentModification) => "CONCURRENT_MODIFICATION",
            AccessError::Metering(_) => "PERSISTENCE_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_feature_is_client_error() {
        let err = AccessError::UnknownFeature("nonsense".to_string());
        assert!(!err.is_server_error());
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "UNKNOWN_FEATURE");
    }

    #[test]
    fn test_metering_error_converts() {
        let err: AccessError = MeteringError::Store("connection refused".to_string()).into();
        assert!(err.is_server_error());
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.error_code(), "PERSISTENCE_ERROR");
    }

    #[test]
    fn test_concurrent_modification_maps_to_conflict() {
        let err: AccessError = MeteringError::ConcurrentModification.into();
        assert_eq!(err.status_code(), 409);
    }
}
