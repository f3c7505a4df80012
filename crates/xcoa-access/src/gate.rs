//! Feature gate service
//!
//! This module binds the plan catalog, the subscription collaborator, and
//! the usage ledger into the access-check service that request handlers
//! call before rendering gated content or performing a gated action.
//!
//! The gate fails closed: if the subscription provider or the usage store
//! is unavailable, the check returns an error and the caller must deny the
//! action. Access is never granted as a fallback.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use xcoa_metering::{BillingPeriod, UsageStore};
use xcoa_plans::{FeatureKey, MeteredFeature, PlanTier};

use crate::error::{AccessError, AccessResult};
use crate::evaluate::{check_access, FeatureAccess};

/// Supplies a user's current plan tier.
///
/// Implemented by the subscription/billing collaborator (e.g. a database
/// row or a billing-provider client); the gate only needs the tier.
#[async_trait]
pub trait SubscriptionProvider: Send + Sync {
    /// Resolve the current plan tier for a user.
    async fn plan(&self, user_id: Uuid) -> AccessResult<PlanTier>;
}

/// Configuration for the feature gate.
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Consumed fraction of a finite quota at which a check is flagged as
    /// near its limit (display concern only).
    pub near_limit_threshold: f64,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            near_limit_threshold: 0.8,
        }
    }
}

/// The feature-access gate.
///
/// One instance is shared across request handlers. Checks and usage
/// recording are separate operations: a handler checks before acting and
/// records only after the action succeeds, so failed actions are never
/// charged against a quota.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use uuid::Uuid;
/// use xcoa_access::{FeatureGate, SubscriptionProvider};
/// use xcoa_metering::MemoryUsageStore;
/// use xcoa_plans::MeteredFeature;
///
/// async fn example(subscriptions: Arc<dyn SubscriptionProvider>) {
///     let gate = FeatureGate::new(subscriptions, Arc::new(MemoryUsageStore::new()));
///     let user_id = Uuid::now_v7();
///
///     let access = gate.check(user_id, MeteredFeature::Search.into()).await.unwrap();
///     if access.allowed {
///         // ... perform the search ...
///         gate.record(user_id, MeteredFeature::Search).await.unwrap();
///     }
/// }
/// ```
pub struct FeatureGate {
    /// Subscription collaborator resolving user → plan tier.
    subscriptions: Arc<dyn SubscriptionProvider>,

    /// Usage ledger.
    usage: Arc<dyn UsageStore>,

    /// Gate configuration.
    config: GateConfig,
}

impl std::fmt::Debug for FeatureGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureGate")
            .field("config", &self.config)
            .finish()
    }
}

impl FeatureGate {
    /// Create a gate over the given collaborators with default config.
    pub fn new(subscriptions: Arc<dyn SubscriptionProvider>, usage: Arc<dyn UsageStore>) -> Self {
        Self {
            subscriptions,
            usage,
            config: GateConfig::default(),
        }
    }

    /// Replace the gate configuration.
    pub fn with_config(mut self, config: GateConfig) -> Self {
        self.config = config;
        self
    }

    /// Check whether a user may use a feature right now.
    ///
    /// The billing period is derived once at entry; handlers that go on to
    /// call `record` after a successful action and need the two to agree
    /// across a month boundary should use [`check_in_period`] and
    /// [`record_in_period`] with a period they derive themselves.
    ///
    /// [`check_in_period`]: FeatureGate::check_in_period
    /// [`record_in_period`]: FeatureGate::record_in_period
    pub async fn check(&self, user_id: Uuid, feature: FeatureKey) -> AccessResult<FeatureAccess> {
        self.check_in_period(user_id, feature, BillingPeriod::current())
            .await
    }

    /// Check a feature against an explicit billing period.
    pub async fn check_in_period(
        &self,
        user_id: Uuid,
        feature: FeatureKey,
        period: BillingPeriod,
    ) -> AccessResult<FeatureAccess> {
        let plan = self.subscriptions.plan(user_id).await?;

        // A missing counter reads as 0; gated features have no counter.
        let usage = match feature {
            FeatureKey::Metered(metered) => self.usage.usage(user_id, metered, period).await?,
            FeatureKey::Gated(_) => 0,
        };

        let access = check_access(plan, feature, usage);
        if access.allowed {
            tracing::debug!(
                %user_id,
                feature = feature.as_str(),
                plan = plan.as_str(),
                remaining = ?access.remaining,
                "feature access granted"
            );
        } else {
            tracing::warn!(
                %user_id,
                feature = feature.as_str(),
                plan = plan.as_str(),
                "feature access denied"
            );
        }
        Ok(access)
    }

    /// Check a feature identified by its string key.
    ///
    /// This is the entry point for the HTTP boundary
    /// (`GET /api/subscription/check-feature?feature=<key>`): an
    /// unrecognized key is an `UnknownFeature` error, not a default-deny
    /// or default-allow.
    pub async fn check_key(&self, user_id: Uuid, key: &str) -> AccessResult<FeatureAccess> {
        let feature = FeatureKey::parse(key)
            .ok_or_else(|| AccessError::UnknownFeature(key.to_string()))?;
        self.check(user_id, feature).await
    }

    /// Record one use of a metered feature in the current period.
    ///
    /// Call this only after the gated action has succeeded.
    ///
    /// # Returns
    ///
    /// The new usage count
    pub async fn record(&self, user_id: Uuid, feature: MeteredFeature) -> AccessResult<u64> {
        self.record_in_period(user_id, feature, BillingPeriod::current())
            .await
    }

    /// Record one use of a metered feature against an explicit period.
    pub async fn record_in_period(
        &self,
        user_id: Uuid,
        feature: MeteredFeature,
        period: BillingPeriod,
    ) -> AccessResult<u64> {
        let count = self.usage.record(user_id, feature, period).await?;
        tracing::debug!(
            %user_id,
            feature = feature.as_str(),
            count,
            period = %period,
            "usage recorded"
        );
        Ok(count)
    }

    /// Snapshot access for every metered feature, for account usage panels.
    ///
    /// All features are read against the same billing period, derived once.
    pub async fn usage_summary(&self, user_id: Uuid) -> AccessResult<Vec<FeatureAccess>> {
        let period = BillingPeriod::current();
        let plan = self.subscriptions.plan(user_id).await?;

        let mut summary = Vec::with_capacity(MeteredFeature::all().len());
        for feature in MeteredFeature::all() {
            let usage = self.usage.usage(user_id, feature, period).await?;
            summary.push(check_access(plan, FeatureKey::Metered(feature), usage));
        }
        Ok(summary)
    }

    /// Check whether an access result is near its limit under this gate's
    /// configured threshold.
    pub fn is_near_limit(&self, access: &FeatureAccess) -> bool {
        access.near_limit(self.config.near_limit_threshold)
    }
}
