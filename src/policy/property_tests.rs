//! Property-Based Tests for the Quota Policy
//!
//! Verifies the decision rules over arbitrary plans and counters.

use chrono::Utc;
use proptest::prelude::*;

use crate::models::{Plan, SubscriptionStatus, User, VerificationStatus};
use crate::policy::{evaluate, DenyReason};

fn plan(max_active: Option<u32>, max_total: Option<u32>) -> Plan {
    Plan {
        id: "p".into(),
        name: "Plan".into(),
        price: 0.0,
        currency: "AUD".into(),
        max_active_posts: max_active,
        max_total_posts: max_total,
        priority_verification: false,
        features: vec![],
    }
}

fn user(status: SubscriptionStatus, active: u32, total: u32) -> User {
    User {
        id: "u".into(),
        name: None,
        business_name: None,
        email: None,
        avatar_url: None,
        is_verified: false,
        verification_status: VerificationStatus::Pending,
        plan_id: "p".into(),
        subscription_status: status,
        active_posts_count: active,
        total_posts_count: total,
        created_at: Utc::now(),
    }
}

fn subscription_strategy() -> impl Strategy<Value = SubscriptionStatus> {
    prop_oneof![
        Just(SubscriptionStatus::Active),
        Just(SubscriptionStatus::Expired),
        Just(SubscriptionStatus::Cancelled),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Unbounded plans never block an active subscription, whatever the
    // counters say.
    #[test]
    fn prop_unbounded_plan_always_allows(active in 0u32..5_000_000, extra in 0u32..5_000_000) {
        let u = user(SubscriptionStatus::Active, active, active.saturating_add(extra));
        let decision = evaluate(&u, &plan(None, None));
        prop_assert!(decision.can_create);
        prop_assert!(decision.reason.is_none());
    }

    // A non-active subscription blocks regardless of counters and limits,
    // and its reason always wins the tie-break.
    #[test]
    fn prop_subscription_state_wins_tiebreak(
        active in 0u32..100,
        extra in 0u32..100,
        max_active in proptest::option::of(0u32..10),
        max_total in proptest::option::of(0u32..10),
        expired in any::<bool>()
    ) {
        let status = if expired {
            SubscriptionStatus::Expired
        } else {
            SubscriptionStatus::Cancelled
        };
        let u = user(status, active, active.saturating_add(extra));

        let reason = evaluate(&u, &plan(max_active, max_total)).reason.unwrap();

        let expected = if expired {
            DenyReason::SubscriptionExpired
        } else {
            DenyReason::SubscriptionCancelled
        };
        prop_assert_eq!(reason, expected);
    }

    // With an active subscription, the decision allows iff both counters
    // sit strictly below their bounds.
    #[test]
    fn prop_allow_iff_under_both_limits(
        active in 0u32..20,
        extra in 0u32..20,
        max_active in 0u32..20,
        max_total in 0u32..40
    ) {
        let total = active.saturating_add(extra);
        let u = user(SubscriptionStatus::Active, active, total);

        let decision = evaluate(&u, &plan(Some(max_active), Some(max_total)));

        let under_limits = active < max_active && total < max_total;
        prop_assert_eq!(decision.can_create, under_limits);
    }

    // The decision is a pure function: same inputs, same output.
    #[test]
    fn prop_decision_is_deterministic(
        status in subscription_strategy(),
        active in 0u32..50,
        extra in 0u32..50,
        max_active in proptest::option::of(0u32..50),
        max_total in proptest::option::of(0u32..100)
    ) {
        let u = user(status, active, active.saturating_add(extra));
        let p = plan(max_active, max_total);
        prop_assert_eq!(evaluate(&u, &p), evaluate(&u, &p));
    }
}
