//! Policy Module
//!
//! The two independent gates applied around listing creation:
//! - the quota policy (plan limits and subscription state), and
//! - the verification gate (initial publication state).
//!
//! Callers compose them; neither consults the other.

pub mod quota;
pub mod verification;

#[cfg(test)]
mod property_tests;

pub use quota::{decide, evaluate, limit_summary, DenyReason, LimitSummary, QuotaDecision};
pub use verification::initial_post_status;
