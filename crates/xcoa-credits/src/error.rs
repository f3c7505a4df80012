//! Error types for credit-ledger operations

use thiserror::Error;

/// Credit-ledger error types.
#[derive(Debug, Error)]
pub enum CreditError {
    /// The requested debit exceeds the user's balance.
    ///
    /// Recoverable: the caller should surface a top-up or upgrade prompt.
    /// The balance is unchanged.
    #[error("Insufficient credits: {required} required, {balance} available")]
    InsufficientCredits {
        /// Credits the operation required
        required: u32,
        /// Credits actually available
        balance: u32,
    },

    /// The underlying credit store could not be read or written
    #[error("Credit store unavailable: {0}")]
    Store(String),
}

/// Result type for credit-ledger operations.
pub type CreditResult<T> = Result<T, CreditError>;

impl CreditError {
    /// Check if this error is recoverable by user action (top up, upgrade)
    /// rather than a server-side failure.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CreditError::InsufficientCredits { .. })
    }
}
