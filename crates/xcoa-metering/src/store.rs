//! Usage store implementations
//!
//! This module provides the usage-ledger abstraction consumed by the
//! feature-access gate, plus an in-memory implementation for
//! single-process deployments and tests.

use async_trait::async_trait;
use uuid::Uuid;

use xcoa_plans::MeteredFeature;

use crate::error::MeteringResult;
use crate::period::BillingPeriod;

/// Usage ledger for metered features.
///
/// Implementations must make `record` an atomic increment-or-create:
/// concurrent increments of the same (user, feature, period) key must not
/// lose updates. Contention is scoped to a single user's own counters, so
/// no cross-user coordination is required.
///
/// Reading usage never mutates; incrementing is a separate, explicit
/// operation performed only after the gated action has succeeded, so
/// failed actions are never charged against a quota.
#[async_trait]
pub trait UsageStore: Send + Sync {
    /// Read the usage count for a (user, feature, period) key.
    ///
    /// A counter that does not exist yet reads as 0; a missing counter is
    /// not an error.
    async fn usage(
        &self,
        user_id: Uuid,
        feature: MeteredFeature,
        period: BillingPeriod,
    ) -> MeteringResult<u64>;

    /// Atomically increment the usage count for a key, creating it at zero
    /// first if absent.
    ///
    /// # Returns
    ///
    /// The new count after the increment
    async fn record(
        &self,
        user_id: Uuid,
        feature: MeteredFeature,
        period: BillingPeriod,
    ) -> MeteringResult<u64>;
}

#[cfg(feature = "memory")]
pub use memory::MemoryUsageStore;

#[cfg(feature = "memory")]
mod memory {
    use super::*;
    use std::collections::HashMap;
    use tokio::sync::RwLock;

    /// Counter key: one counter per user, per feature, per period.
    type UsageKey = (Uuid, MeteredFeature, BillingPeriod);

    /// In-memory usage store.
    ///
    /// Suitable for single-process deployments and testing. All counter
    /// mutations go through a single write lock, which makes increments to
    /// any one key linearizable. A database-backed implementation should
    /// use the store's native atomic increment instead.
    #[derive(Debug, Default)]
    pub struct MemoryUsageStore {
        counters: RwLock<HashMap<UsageKey, u64>>,
    }

    impl MemoryUsageStore {
        /// Create a new, empty usage store.
        pub fn new() -> Self {
            Self::default()
        }

        /// Drop all counters from periods before `cutoff`.
        ///
        /// Completed periods are only needed for historical reporting,
        /// which lives elsewhere; this keeps a long-running process from
        /// accumulating dead keys.
        ///
        /// # Returns
        ///
        /// The number of counters dropped
        pub async fn purge_before(&self, cutoff: BillingPeriod) -> usize {
            let mut counters = self.counters.write().await;
            let before = counters.len();
            counters.retain(|(_, _, period), _| *period >= cutoff);
            let dropped = before - counters.len();
            if dropped > 0 {
                tracing::debug!(dropped, cutoff = %cutoff, "purged stale usage counters");
            }
            dropped
        }
    }

    #[async_trait]
    impl UsageStore for MemoryUsageStore {
        async fn usage(
            &self,
            user_id: Uuid,
            feature: MeteredFeature,
            period: BillingPeriod,
        ) -> MeteringResult<u64> {
            let counters = self.counters.read().await;
            Ok(counters
                .get(&(user_id, feature, period))
                .copied()
                .unwrap_or(0))
        }

        async fn record(
            &self,
            user_id: Uuid,
            feature: MeteredFeature,
            period: BillingPeriod,
        ) -> MeteringResult<u64> {
            let mut counters = self.counters.write().await;
            let count = counters.entry((user_id, feature, period)).or_insert(0);
            *count += 1;
            Ok(*count)
        }
    }
}
