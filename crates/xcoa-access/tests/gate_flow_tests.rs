//! End-to-end tests for the feature gate.
//!
//! These tests drive the full check → act → record flow the way a request
//! handler would, with a subscription provider backed by a per-user plan
//! table and the in-memory usage ledger.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use xcoa_access::{AccessResult, FeatureGate, SubscriptionProvider};
use xcoa_metering::MemoryUsageStore;
use xcoa_plans::{FeatureKey, MeteredFeature, PlanFeature, PlanTier, Quota};

/// Test fixture providing a plan table and a shared gate.
struct TestFixture {
    /// Per-user plan assignments.
    plans: Arc<PlanTable>,
    /// The gate under test.
    gate: Arc<FeatureGate>,
}

/// Subscription provider backed by a static user → tier table.
struct PlanTable {
    plans: HashMap<Uuid, PlanTier>,
}

#[async_trait]
impl SubscriptionProvider for PlanTable {
    async fn plan(&self, user_id: Uuid) -> AccessResult<PlanTier> {
        // Unknown users default to the free tier, as the web app does for
        // accounts with no subscription row.
        Ok(self.plans.get(&user_id).copied().unwrap_or_default())
    }
}

impl TestFixture {
    fn new(assignments: &[(Uuid, PlanTier)]) -> Self {
        let plans = Arc::new(PlanTable {
            plans: assignments.iter().copied().collect(),
        });
        let gate = Arc::new(FeatureGate::new(
            plans.clone(),
            Arc::new(MemoryUsageStore::new()),
        ));
        Self { plans, gate }
    }
}

#[tokio::test]
async fn free_user_exhausts_monthly_searches() {
    let user_id = Uuid::now_v7();
    let fixture = TestFixture::new(&[(user_id, PlanTier::Free)]);
    let feature = FeatureKey::Metered(MeteredFeature::Search);

    // Walk the counter up to one below the limit.
    for _ in 0..29 {
        let access = fixture.gate.check(user_id, feature).await.unwrap();
        assert!(access.allowed);
        fixture
            .gate
            .record(user_id, MeteredFeature::Search)
            .await
            .unwrap();
    }

    // 29 used: one search left.
    let access = fixture.gate.check(user_id, feature).await.unwrap();
    assert!(access.allowed);
    assert_eq!(access.remaining, Some(1));
    assert_eq!(access.limit, Some(Quota::Limited(30)));

    // Use it, then the next check denies.
    fixture
        .gate
        .record(user_id, MeteredFeature::Search)
        .await
        .unwrap();

    let access = fixture.gate.check(user_id, feature).await.unwrap();
    assert!(!access.allowed);
    assert_eq!(access.remaining, Some(0));
    assert_eq!(access.limit, Some(Quota::Limited(30)));
}

#[tokio::test]
async fn enterprise_ai_interpretation_is_unlimited() {
    let user_id = Uuid::now_v7();
    let fixture = TestFixture::new(&[(user_id, PlanTier::Enterprise)]);

    // Even an absurd consumption level never trips an unlimited quota.
    for _ in 0..1_000 {
        fixture
            .gate
            .record(user_id, MeteredFeature::AiInterpretation)
            .await
            .unwrap();
    }

    let access = fixture
        .gate
        .check(user_id, FeatureKey::Metered(MeteredFeature::AiInterpretation))
        .await
        .unwrap();
    assert!(access.allowed);
    assert_eq!(access.remaining, None);
    assert_eq!(access.limit, Some(Quota::Unlimited));
}

#[tokio::test]
async fn plan_change_takes_effect_on_next_check() {
    let pro_user = Uuid::now_v7();
    let free_user = Uuid::now_v7();
    let fixture = TestFixture::new(&[
        (pro_user, PlanTier::Professional),
        (free_user, PlanTier::Free),
    ]);

    let export = FeatureKey::Gated(PlanFeature::DataExport);
    assert!(!fixture.gate.check(pro_user, export).await.unwrap().allowed);
    assert!(!fixture.gate.check(free_user, export).await.unwrap().allowed);

    let assistance = FeatureKey::Gated(PlanFeature::CopyrightAssistance);
    assert!(fixture.gate.check(pro_user, assistance).await.unwrap().allowed);
    assert!(!fixture.gate.check(free_user, assistance).await.unwrap().allowed);

    // The provider, not the gate, owns plan state.
    assert_eq!(
        fixture.plans.plan(Uuid::now_v7()).await.unwrap(),
        PlanTier::Free
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_handlers_never_lose_recorded_usage() {
    let user_id = Uuid::now_v7();
    let fixture = TestFixture::new(&[(user_id, PlanTier::Professional)]);
    let n = 50;

    let mut handles = Vec::with_capacity(n);
    for _ in 0..n {
        let gate = fixture.gate.clone();
        handles.push(tokio::spawn(async move {
            gate.record(user_id, MeteredFeature::ApiCall).await.unwrap()
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let access = fixture
        .gate
        .check(user_id, FeatureKey::Metered(MeteredFeature::ApiCall))
        .await
        .unwrap();
    // Professional allows 1000 API calls; 50 are gone.
    assert_eq!(access.remaining, Some(950));
}

#[tokio::test]
async fn check_feature_endpoint_shape() {
    let user_id = Uuid::now_v7();
    let fixture = TestFixture::new(&[(user_id, PlanTier::Free)]);

    // The web handler passes the raw query value straight through.
    let access = fixture.gate.check_key(user_id, "case_studies").await.unwrap();
    let json = serde_json::to_value(&access).unwrap();
    assert_eq!(json["feature"], "case_studies");
    assert_eq!(json["allowed"], false);

    let err = fixture.gate.check_key(user_id, "mind_reading").await.unwrap_err();
    assert_eq!(err.status_code(), 400);
    assert_eq!(err.error_code(), "UNKNOWN_FEATURE");
}
