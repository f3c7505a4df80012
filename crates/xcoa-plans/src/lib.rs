//! # xCOA Plan Catalog
//!
//! This crate provides the subscription plan catalog for the xCOA platform,
//! shared across the web application, API services, and admin tooling.
//!
//! ## Overview
//!
//! The xcoa-plans crate handles:
//! - **Plan Tiers**: The closed set of subscription levels
//! - **Quotas**: Finite or unlimited monthly allowances
//! - **Plan Limits**: The limits/features record for each tier
//! - **Feature Keys**: Typed identifiers for metered and boolean-gated features
//!
//! ## Architecture
//!
//! ```text
//! PlanTier ──limits()──▶ PlanLimits
//!                          ├─ quota(MeteredFeature)  ─▶ Quota
//!                          ├─ grants(PlanFeature)    ─▶ bool
//!                          └─ support_level          ─▶ SupportLevel
//! ```
//!
//! The catalog is static configuration: every tier has a complete limits
//! record by construction, so lookups are total functions with no failure
//! mode. An unrecognized tier or feature cannot be represented.
//!
//! ## Usage
//!
//! ```
//! use xcoa_plans::{MeteredFeature, PlanTier, Quota};
//!
//! let limits = PlanTier::Free.limits();
//! assert_eq!(limits.quota(MeteredFeature::Search), Quota::Limited(30));
//!
//! let limits = PlanTier::Enterprise.limits();
//! assert_eq!(limits.quota(MeteredFeature::Search), Quota::Unlimited);
//! ```
//!
//! ## Cross-Crate Integration
//!
//! This crate is designed to work with:
//! - `xcoa-access`: Feature access evaluation against usage counters
//! - `xcoa-metering`: Per-period usage ledger keyed by `MeteredFeature`

pub mod features;
pub mod limits;
pub mod quota;
pub mod tier;

// Re-export main types for convenience
pub use features::{FeatureKey, MeteredFeature, PlanFeature};
pub use limits::{PlanLimits, SupportLevel};
pub use quota::Quota;
pub use tier::PlanTier;
