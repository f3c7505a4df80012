//! Credit store implementations
//!
//! This module provides the credit-balance abstraction consumed by the
//! copyright-contact workflow, plus an in-memory implementation for
//! single-process deployments and tests.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::{CreditError, CreditResult};

/// Per-user credit balance with an atomic sufficient-balance debit.
///
/// Implementations must perform the balance check and the subtraction as
/// one atomic operation. Two concurrent debits must never both succeed
/// against a balance that only covers one of them, and the balance must
/// never go negative.
#[async_trait]
pub trait CreditStore: Send + Sync {
    /// Read the current balance for a user.
    ///
    /// A user with no ledger entry reads as 0.
    async fn balance(&self, user_id: Uuid) -> CreditResult<u32>;

    /// Atomically debit `amount` credits if the balance covers it.
    ///
    /// # Returns
    ///
    /// The remaining balance after the debit, or
    /// `CreditError::InsufficientCredits` with the balance unchanged
    async fn debit(&self, user_id: Uuid, amount: u32) -> CreditResult<u32>;

    /// Add `amount` credits to a user's balance (top-up or grant).
    ///
    /// # Returns
    ///
    /// The new balance after the deposit
    async fn deposit(&self, user_id: Uuid, amount: u32) -> CreditResult<u32>;
}

#[cfg(feature = "memory")]
pub use memory::MemoryCreditStore;

#[cfg(feature = "memory")]
mod memory {
    use super::*;
    use std::collections::HashMap;
    use tokio::sync::RwLock;

    /// In-memory credit store.
    ///
    /// Suitable for single-process deployments and testing. The debit
    /// check-and-subtract happens under a single write lock, which makes
    /// it atomic; a database-backed implementation should use a
    /// conditional update instead.
    #[derive(Debug, Default)]
    pub struct MemoryCreditStore {
        balances: RwLock<HashMap<Uuid, u32>>,
    }

    impl MemoryCreditStore {
        /// Create a new, empty credit store.
        pub fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl CreditStore for MemoryCreditStore {
        async fn balance(&self, user_id: Uuid) -> CreditResult<u32> {
            let balances = self.balances.read().await;
            Ok(balances.get(&user_id).copied().unwrap_or(0))
        }

        async fn debit(&self, user_id: Uuid, amount: u32) -> CreditResult<u32> {
            let mut balances = self.balances.write().await;
            let balance = balances.entry(user_id).or_insert(0);

            if *balance < amount {
                tracing::warn!(
                    %user_id,
                    required = amount,
                    balance = *balance,
                    "credit debit rejected"
                );
                return Err(CreditError::InsufficientCredits {
                    required: amount,
                    balance: *balance,
                });
            }

            *balance -= amount;
            Ok(*balance)
        }

        async fn deposit(&self, user_id: Uuid, amount: u32) -> CreditResult<u32> {
            let mut balances = self.balances.write().await;
            let balance = balances.entry(user_id).or_insert(0);
            *balance = balance.saturating_add(amount);
            Ok(*balance)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_unknown_user_reads_zero_balance() {
        let store = MemoryCreditStore::new();
        assert_eq!(store.balance(Uuid::now_v7()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_deposit_then_debit() {
        let store = MemoryCreditStore::new();
        let user_id = Uuid::now_v7();

        assert_eq!(store.deposit(user_id, 20).await.unwrap(), 20);
        assert_eq!(store.debit(user_id, 8).await.unwrap(), 12);
        assert_eq!(store.balance(user_id).await.unwrap(), 12);
    }

    #[tokio::test]
    async fn test_insufficient_debit_leaves_balance_unchanged() {
        let store = MemoryCreditStore::new();
        let user_id = Uuid::now_v7();
        store.deposit(user_id, 5).await.unwrap();

        let err = store.debit(user_id, 8).await.unwrap_err();
        match err {
            CreditError::InsufficientCredits { required, balance } => {
                assert_eq!(required, 8);
                assert_eq!(balance, 5);
            }
            other => panic!("unexpected error: {other}"),
        }

        assert_eq!(store.balance(user_id).await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_exact_balance_debit_succeeds() {
        let store = MemoryCreditStore::new();
        let user_id = Uuid::now_v7();
        store.deposit(user_id, 8).await.unwrap();

        assert_eq!(store.debit(user_id, 8).await.unwrap(), 0);
        assert_eq!(store.balance(user_id).await.unwrap(), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_full_balance_debits_one_wins() {
        let store = Arc::new(MemoryCreditStore::new());
        let user_id = Uuid::now_v7();
        store.deposit(user_id, 10).await.unwrap();

        // Both requests want the entire balance; only one may get it.
        let a = {
            let store = store.clone();
            tokio::spawn(async move { store.debit(user_id, 10).await })
        };
        let b = {
            let store = store.clone();
            tokio::spawn(async move { store.debit(user_id, 10).await })
        };

        let results = [a.await.unwrap(), b.await.unwrap()];
        let successes = results.iter().filter(|r| r.is_ok()).count();
        let rejections = results
            .iter()
            .filter(|r| {
                matches!(
                    r,
                    Err(CreditError::InsufficientCredits { .. })
                )
            })
            .count();

        assert_eq!(successes, 1);
        assert_eq!(rejections, 1);
        assert_eq!(store.balance(user_id).await.unwrap(), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_debits_never_overspend() {
        let store = Arc::new(MemoryCreditStore::new());
        let user_id = Uuid::now_v7();
        store.deposit(user_id, 25).await.unwrap();

        // Ten debits of 10 against a balance of 25: at most two can land.
        let mut handles = Vec::new();
        for _ in 0..10 {
            let store = store.clone();
            handles.push(tokio::spawn(async move { store.debit(user_id, 10).await }));
        }

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }

        assert_eq!(successes, 2);
        assert_eq!(store.balance(user_id).await.unwrap(), 5);
    }
}
