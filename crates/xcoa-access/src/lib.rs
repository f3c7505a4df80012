//! # xCOA Feature Access
//!
//! This crate provides feature-access evaluation and gating for the xCOA
//! platform, shared across the web application and API services.
//!
//! ## Overview
//!
//! The xcoa-access crate handles:
//! - **Evaluation**: The pure access decision over (plan, feature, usage)
//! - **Gating**: The `FeatureGate` service binding the subscription
//!   collaborator and the usage ledger behind one check/record API
//! - **Errors**: Fail-closed error taxonomy with HTTP mapping helpers
//!
//! ## Architecture
//!
//! ```text
//! request handler
//!   └─ FeatureGate
//!        ├─ SubscriptionProvider ─▶ PlanTier        (billing collaborator)
//!        ├─ UsageStore           ─▶ usage count     (xcoa-metering)
//!        └─ check_access(plan, feature, usage) ─▶ FeatureAccess
//! ```
//!
//! The decision itself is pure and idempotent; the gate owns the two side
//! channels around it (plan lookup, usage snapshot) and the explicit
//! post-success `record` that moves a counter.
//!
//! ## Fail-closed policy
//!
//! If the subscription provider or the usage store cannot be reached, the
//! check returns an error and the gated action must be denied. Metered and
//! paid features are never granted on a failed lookup.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use uuid::Uuid;
//! use xcoa_access::{FeatureGate, SubscriptionProvider};
//! use xcoa_metering::MemoryUsageStore;
//! use xcoa_plans::{FeatureKey, MeteredFeature};
//!
//! async fn handle_search(gate: &FeatureGate, user_id: Uuid) {
//!     let access = gate
//!         .check(user_id, FeatureKey::Metered(MeteredFeature::Search))
//!         .await
//!         .unwrap();
//!
//!     if !access.allowed {
//!         // surface an upgrade prompt
//!         return;
//!     }
//!
//!     // ... run the search ...
//!
//!     // charge quota only after the action succeeded
//!     gate.record(user_id, MeteredFeature::Search).await.unwrap();
//! }
//! ```
//!
//! ## Cross-Crate Integration
//!
//! This crate works with:
//! - `xcoa-plans`: Plan tiers, quotas, and feature keys
//! - `xcoa-metering`: Billing periods and the usage ledger
//! - `xcoa-credits`: The separate pay-per-use copyright-contact ledger

pub mod error;
pub mod evaluate;
pub mod gate;

// Re-export main types for convenience
pub use error::{AccessError, AccessResult};
pub use evaluate::{check_access, FeatureAccess};
pub use gate::{FeatureGate, GateConfig, SubscriptionProvider};
