//! Cache Key Builders
//!
//! Key construction is the caller's responsibility; these builders keep
//! keys collision-free across distinct logical resources. List keys embed
//! the full normalized query token so two different queries never share a
//! slot.
//!
//! The TTL constants reflect how volatile each resource is: category data
//! barely changes, post listings churn constantly.

/// Category data is near-static reference data.
pub const CATEGORIES_TTL_MIN: u64 = 30;
/// Listings churn with every create/update.
pub const POSTS_LIST_TTL_MIN: u64 = 2;
/// Post detail pages change on edits and view counts.
pub const POST_DETAIL_TTL_MIN: u64 = 5;
/// Dashboard counters follow the user's own writes.
pub const DASHBOARD_STATS_TTL_MIN: u64 = 2;
/// Notification feeds update on external events.
pub const NOTIFICATIONS_TTL_MIN: u64 = 5;
/// Public profiles change rarely.
pub const USER_PROFILE_TTL_MIN: u64 = 10;

pub fn categories() -> String {
    "categories".to_string()
}

/// `token` must be the normalized filter/sort/pagination parameter set
/// (see `PostQuery::cache_token`).
pub fn posts_list(token: &str) -> String {
    format!("posts_list_{token}")
}

pub fn post_detail(post_id: &str) -> String {
    format!("post_detail_{post_id}")
}

pub fn user_profile(user_id: &str) -> String {
    format!("user_profile_{user_id}")
}

pub fn dashboard_stats(user_id: &str) -> String {
    format!("dashboard_stats_{user_id}")
}

pub fn notifications(user_id: &str) -> String {
    format!("notifications_{user_id}")
}
