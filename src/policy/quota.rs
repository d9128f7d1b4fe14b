//! Quota Policy
//!
//! Decides whether a user may create a new listing right now, given their
//! plan and current usage counters, and produces the usage/limit summary
//! shown in the dashboard and plans UI.
//!
//! The policy is pure: it reads already-fetched records, performs no I/O,
//! and never mutates counters. Unresolved user/plan references degrade to
//! a deny decision with a reason, never to an error that aborts the
//! caller. The evaluation order below is a deliberate tie-break (first
//! matching rule wins), so a user who is both expired and over a limit is
//! reported as expired.

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::models::{Plan, SubscriptionStatus, User};

// == Deny Reason ==
/// Why a creation attempt was refused. `Display` carries the user-facing
/// message; [`code`](DenyReason::code) the stable machine identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DenyReason {
    #[error("User not found")]
    UserNotFound,
    #[error("No plan found")]
    PlanNotFound,
    #[error("Subscription expired")]
    SubscriptionExpired,
    #[error("Subscription cancelled")]
    SubscriptionCancelled,
    #[error("Maximum active posts reached ({0})")]
    ActiveLimitReached(u32),
    #[error("Maximum total posts reached ({0})")]
    TotalLimitReached(u32),
}

impl DenyReason {
    pub fn code(&self) -> &'static str {
        match self {
            DenyReason::UserNotFound => "user_not_found",
            DenyReason::PlanNotFound => "plan_not_found",
            DenyReason::SubscriptionExpired => "subscription_expired",
            DenyReason::SubscriptionCancelled => "subscription_cancelled",
            DenyReason::ActiveLimitReached(_) => "active_limit_reached",
            DenyReason::TotalLimitReached(_) => "total_limit_reached",
        }
    }
}

// Reasons cross the wire as their human-readable message.
impl Serialize for DenyReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// == Quota Decision ==
/// The permission result; `reason` is present iff the creation is denied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotaDecision {
    pub can_create: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<DenyReason>,
}

impl QuotaDecision {
    pub fn allowed() -> Self {
        Self {
            can_create: true,
            reason: None,
        }
    }

    pub fn denied(reason: DenyReason) -> Self {
        Self {
            can_create: false,
            reason: Some(reason),
        }
    }
}

// == Limit Summary ==
/// Current usage against plan limits, for display. Unbounded limits are
/// `None` (serialized as `null`) — distinct from a limit of zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitSummary {
    pub active_posts: u32,
    pub max_active_posts: Option<u32>,
    pub total_posts: u32,
    pub max_total_posts: Option<u32>,
    pub plan_name: String,
    pub subscription_status: SubscriptionStatus,
}

// == Decide ==
/// Full decision over possibly-unresolved records: steps 1–2 of the
/// evaluation order (user resolved? plan resolved?) before delegating to
/// [`evaluate`].
pub fn decide(user: Option<&User>, plan: Option<&Plan>) -> QuotaDecision {
    let Some(user) = user else {
        return QuotaDecision::denied(DenyReason::UserNotFound);
    };
    let Some(plan) = plan else {
        return QuotaDecision::denied(DenyReason::PlanNotFound);
    };
    evaluate(user, plan)
}

// == Evaluate ==
/// Steps 3–7: subscription state first, then the active-post limit, then
/// the lifetime limit. A limit blocks once the counter has *reached* it
/// (`count >= limit`); an unbounded limit never blocks.
pub fn evaluate(user: &User, plan: &Plan) -> QuotaDecision {
    match user.subscription_status {
        SubscriptionStatus::Expired => {
            return QuotaDecision::denied(DenyReason::SubscriptionExpired)
        }
        SubscriptionStatus::Cancelled => {
            return QuotaDecision::denied(DenyReason::SubscriptionCancelled)
        }
        SubscriptionStatus::Active => {}
    }

    if let Some(max_active) = plan.max_active_posts {
        if user.active_posts_count >= max_active {
            return QuotaDecision::denied(DenyReason::ActiveLimitReached(max_active));
        }
    }

    if let Some(max_total) = plan.max_total_posts {
        if user.total_posts_count >= max_total {
            return QuotaDecision::denied(DenyReason::TotalLimitReached(max_total));
        }
    }

    QuotaDecision::allowed()
}

// == Limit Summary ==
/// Usage summary for display; absent when user or plan cannot be
/// resolved.
pub fn limit_summary(user: Option<&User>, plan: Option<&Plan>) -> Option<LimitSummary> {
    let (user, plan) = (user?, plan?);
    Some(LimitSummary {
        active_posts: user.active_posts_count,
        max_active_posts: plan.max_active_posts,
        total_posts: user.total_posts_count,
        max_total_posts: plan.max_total_posts,
        plan_name: plan.name.clone(),
        subscription_status: user.subscription_status,
    })
}
