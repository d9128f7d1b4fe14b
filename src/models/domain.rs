//! Domain records
//!
//! The persisted record shapes the API serves: users with their plan and
//! quota state, plans, listings, categories and notifications. Field
//! casing follows the database rows (snake_case on the wire).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// == Subscription Status ==
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Expired,
    Cancelled,
}

// == Verification Status ==
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Pending,
    Approved,
    Rejected,
}

// == Post Status ==
/// Moderation state of a listing. Only `Approved` listings are published;
/// `Pending` listings are held for review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Pending,
    Approved,
    Rejected,
}

// == Privacy ==
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Privacy {
    Public,
    Private,
}

// == Plan ==
/// Immutable reference data seeded once; exactly one plan is associated
/// with a user at any time (by `plan_id`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub currency: String,
    /// `None` means unbounded — never to be confused with `Some(0)`.
    pub max_active_posts: Option<u32>,
    /// `None` means unbounded.
    pub max_total_posts: Option<u32>,
    pub priority_verification: bool,
    /// Display-only feature list, in presentation order.
    pub features: Vec<String>,
}

// == User ==
/// A marketplace user, carrying the quota state the policy reads:
/// subscription status and the post counters. The policy never mutates
/// these; the store adjusts counters when listings are created or change
/// status.
///
/// Invariant: `active_posts_count <= total_posts_count`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: Option<String>,
    pub business_name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
    pub is_verified: bool,
    pub verification_status: VerificationStatus,
    pub plan_id: String,
    pub subscription_status: SubscriptionStatus,
    pub active_posts_count: u32,
    pub total_posts_count: u32,
    pub created_at: DateTime<Utc>,
}

// == Category ==
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    /// Service categories are listed separately from product categories.
    pub is_service: bool,
}

// == Post ==
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub category_id: Option<String>,
    pub price: f64,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub privacy: Privacy,
    pub status: PostStatus,
    pub is_active: bool,
    pub show_business_name: bool,
    pub view_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// A listing is browsable when approved, public and not deactivated.
    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Approved && self.privacy == Privacy::Public && self.is_active
    }
}

// == Notification ==
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub content: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

// == Public User ==
/// The author fields joined onto listings and profiles; never exposes
/// quota or contact state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: String,
    pub name: Option<String>,
    pub business_name: Option<String>,
    pub avatar_url: Option<String>,
    pub is_verified: bool,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            business_name: user.business_name.clone(),
            avatar_url: user.avatar_url.clone(),
            is_verified: user.is_verified,
        }
    }
}
