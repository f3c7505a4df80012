//! # xCOA Usage Metering
//!
//! This crate provides the per-period usage ledger for the xCOA platform:
//! one counter per (user, metered feature, billing period), incremented as
//! gated actions succeed and read by the feature-access evaluator.
//!
//! ## Overview
//!
//! The xcoa-metering crate handles:
//! - **Billing Periods**: Calendar-month windows over which counters reset
//! - **Usage Store**: The `UsageStore` trait consumed by the access gate
//! - **In-Memory Store**: Reference implementation for single-process
//!   deployments and tests
//!
//! ## Counter lifecycle
//!
//! Counters are created lazily on first use in a period and never
//! decremented. Rollover reset is implicit: counters are keyed by period,
//! so a new period starts at zero without a reset job. Stale periods can be
//! dropped with [`MemoryUsageStore::purge_before`].
//!
//! ## Concurrency
//!
//! `record` is an atomic increment-or-create. Increments to the same
//! (user, feature, period) key are linearizable: N concurrent `record`
//! calls always land on a final count of start + N, never fewer.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use uuid::Uuid;
//! use xcoa_metering::{BillingPeriod, MemoryUsageStore, UsageStore};
//! use xcoa_plans::MeteredFeature;
//!
//! async fn example() {
//!     let store = MemoryUsageStore::new();
//!     let user_id = Uuid::now_v7();
//!     let period = BillingPeriod::current();
//!
//!     let count = store
//!         .record(user_id, MeteredFeature::Search, period)
//!         .await
//!         .unwrap();
//!     assert_eq!(count, 1);
//! }
//! ```

pub mod error;
pub mod period;
pub mod store;

// Re-export main types
pub use error::{MeteringError, MeteringResult};
pub use period::BillingPeriod;
pub use store::UsageStore;

#[cfg(feature = "memory")]
pub use store::MemoryUsageStore;
