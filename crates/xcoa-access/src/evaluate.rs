//! Feature-access evaluation
//!
//! The evaluator is a pure function over (plan, feature, usage count): no
//! side effects, no clock, no store. Calling it twice with the same inputs
//! yields the same decision. Incrementing usage is a separate, explicit
//! operation owned by the gate.

use serde::{Deserialize, Serialize};

use xcoa_plans::{FeatureKey, PlanTier, Quota};

/// The outcome of a feature-access check.
///
/// Computed per request, never persisted.
///
/// - Metered feature, finite quota: `allowed = count < limit`,
///   `remaining = max(limit - count, 0)`.
/// - Metered feature, unlimited quota: always allowed, `remaining` is
///   `None`.
/// - Boolean gate: `allowed` is the plan flag; `remaining` and `limit`
///   carry no meaning and are absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureAccess {
    /// The feature that was checked
    pub feature: FeatureKey,

    /// Whether the action is permitted
    pub allowed: bool,

    /// Remaining allowance in the current period.
    /// `None` for unlimited quotas and boolean gates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining: Option<u64>,

    /// The plan's quota for this feature. `None` for boolean gates;
    /// serializes as `null` for unlimited quotas.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<Quota>,
}

impl FeatureAccess {
    /// Check whether consumption has reached the given fraction of a
    /// finite quota.
    ///
    /// A display concern for "approaching your limit" warnings, not part
    /// of the access decision. Always `false` for unlimited quotas and
    /// boolean gates.
    ///
    /// # Arguments
    ///
    /// * `threshold` - Consumed fraction that counts as near, e.g. `0.8`
    pub fn near_limit(&self, threshold: f64) -> bool {
        match self.limit {
            Some(Quota::Limited(limit)) if limit > 0 => {
                let consumed = u64::from(limit).saturating_sub(self.remaining.unwrap_or(0));
                consumed as f64 / f64::from(limit) >= threshold
            }
            _ => false,
        }
    }
}

/// Evaluate whether a plan permits a feature at the given usage count.
///
/// Pure and stateless. For metered features, `usage` is the counter value
/// for the current billing period; a counter missing for the period is
/// passed as 0 by the caller. For boolean gates, `usage` is ignored.
///
/// This check does **not** increment usage. Incrementing happens only
/// after the gated action succeeds, via the gate's `record` operation.
///
/// # Examples
///
/// ```
/// use xcoa_access::check_access;
/// use xcoa_plans::{FeatureKey, MeteredFeature, PlanTier};
///
/// let access = check_access(
///     PlanTier::Free,
///     FeatureKey::Metered(MeteredFeature::Search),
///     29,
/// );
/// assert!(access.allowed);
/// assert_eq!(access.remaining, Some(1));
/// ```
pub fn check_access(plan: PlanTier, feature: FeatureKey, usage: u64) -> FeatureAccess {
    let limits = plan.limits();

    match feature {
        FeatureKey::Metered(metered) => {
            let quota = limits.quota(metered);
            FeatureAccess {
                feature,
                allowed: quota.allows(usage),
                remaining: quota.remaining(usage),
                limit: Some(quota),
            }
        }
        FeatureKey::Gated(gated) => FeatureAccess {
            feature,
            allowed: limits.grants(gated),
            remaining: None,
            limit: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xcoa_plans::{MeteredFeature, PlanFeature};

    #[test]
    fn test_finite_quota_arithmetic() {
        let feature = FeatureKey::Metered(MeteredFeature::Search);

        // free plan: 30 searches per month
        let access = check_access(PlanTier::Free, feature, 29);
        assert!(access.allowed);
        assert_eq!(access.remaining, Some(1));
        assert_eq!(access.limit, Some(Quota::Limited(30)));

        let access = check_access(PlanTier::Free, feature, 30);
        assert!(!access.allowed);
        assert_eq!(access.remaining, Some(0));

        // Overconsumed counters clamp rather than underflow
        let access = check_access(PlanTier::Free, feature, 45);
        assert!(!access.allowed);
        assert_eq!(access.remaining, Some(0));
    }

    #[test]
    fn test_unlimited_quota_always_allows() {
        let feature = FeatureKey::Metered(MeteredFeature::AiInterpretation);

        let access = check_access(PlanTier::Enterprise, feature, 1_000_000);
        assert!(access.allowed);
        assert_eq!(access.remaining, None);
        assert_eq!(access.limit, Some(Quota::Unlimited));

        let access = check_access(PlanTier::Enterprise, feature, u64::MAX);
        assert!(access.allowed);
    }

    #[test]
    fn test_missing_usage_treated_as_zero_by_caller() {
        let feature = FeatureKey::Metered(MeteredFeature::ScaleView);
        let access = check_access(PlanTier::Free, feature, 0);
        assert!(access.allowed);
        assert_eq!(access.remaining, Some(10));
    }

    #[test]
    fn test_boolean_gate_ignores_usage() {
        let feature = FeatureKey::Gated(PlanFeature::DataExport);

        let access = check_access(PlanTier::Free, feature, 0);
        assert!(!access.allowed);
        assert_eq!(access.remaining, None);
        assert_eq!(access.limit, None);

        let access = check_access(PlanTier::Advanced, feature, 999_999);
        assert!(access.allowed);
    }

    #[test]
    fn test_idempotent_reads() {
        let feature = FeatureKey::Metered(MeteredFeature::Search);
        let a = check_access(PlanTier::Professional, feature, 123);
        let b = check_access(PlanTier::Professional, feature, 123);
        assert_eq!(a.allowed, b.allowed);
        assert_eq!(a.remaining, b.remaining);
        assert_eq!(a.limit, b.limit);
    }

    #[test]
    fn test_monotonicity_of_denials() {
        // Any count denied under a higher tier is denied under a lower one.
        let feature = FeatureKey::Metered(MeteredFeature::Search);
        for count in [0u64, 29, 30, 499, 500, 5000] {
            let free = check_access(PlanTier::Free, feature, count);
            let pro = check_access(PlanTier::Professional, feature, count);
            if !pro.allowed {
                assert!(!free.allowed, "count {count} allowed on free, denied on pro");
            }
        }
    }

    #[test]
    fn test_near_limit_threshold() {
        let feature = FeatureKey::Metered(MeteredFeature::Search);

        // 24/30 = 0.8 exactly
        let access = check_access(PlanTier::Free, feature, 24);
        assert!(access.near_limit(0.8));

        let access = check_access(PlanTier::Free, feature, 23);
        assert!(!access.near_limit(0.8));

        // Unlimited and boolean gates are never near a limit
        let access = check_access(
            PlanTier::Enterprise,
            FeatureKey::Metered(MeteredFeature::Search),
            u64::MAX,
        );
        assert!(!access.near_limit(0.8));

        let access = check_access(PlanTier::Free, FeatureKey::Gated(PlanFeature::CaseStudies), 0);
        assert!(!access.near_limit(0.8));
    }

    #[test]
    fn test_zero_quota_denies_first_action() {
        // free plan has no API access at all
        let access = check_access(PlanTier::Free, FeatureKey::Metered(MeteredFeature::ApiCall), 0);
        assert!(!access.allowed);
        assert_eq!(access.remaining, Some(0));
    }

    #[test]
    fn test_serialized_shape() {
        let access = check_access(
            PlanTier::Enterprise,
            FeatureKey::Metered(MeteredFeature::Search),
            5,
        );
        let json = serde_json::to_value(&access).unwrap();
        assert_eq!(json["feature"], "search");
        assert_eq!(json["allowed"], true);
        // Unlimited quota serializes as an explicit null limit
        assert!(json.get("limit").is_some());
        assert!(json["limit"].is_null());
        assert!(json.get("remaining").is_none());
    }
}
