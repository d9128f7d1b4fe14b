//! Verification Gate
//!
//! Decides the initial publication state of a newly created listing from
//! the author's verification state. Deliberately orthogonal to the quota
//! policy: verification never blocks creation, and a verified user can
//! still be quota-blocked.

use crate::models::{PostStatus, User};

// == Initial Post Status ==
/// Verified authors publish immediately; unverified authors' listings are
/// held for review until verification completes.
pub fn initial_post_status(user: &User) -> PostStatus {
    if user.is_verified {
        PostStatus::Approved
    } else {
        PostStatus::Pending
    }
}
