//! Response DTOs
//!
//! Outgoing HTTP bodies. Policy and summary payloads use the camelCase
//! shape the client-side gating UI consumes; domain rows keep their
//! database casing.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cache::CacheStats;
use crate::models::{Category, Plan, Post, PublicUser};
use crate::policy::{LimitSummary, QuotaDecision};

// == Categories Response ==
/// Product and service categories, listed separately.
#[derive(Debug, Clone, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<Category>,
    pub services: Vec<Category>,
}

// == Post With Relations ==
/// A listing with its author and category joined on, as list items and
/// detail pages render it.
#[derive(Debug, Clone, Serialize)]
pub struct PostWithRelations {
    #[serde(flatten)]
    pub post: Post,
    pub user: PublicUser,
    pub category: Option<Category>,
}

// == Post Page ==
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPage {
    pub posts: Vec<PostWithRelations>,
    pub total: usize,
    pub page: u32,
    pub limit: u32,
    pub has_more: bool,
}

// == Plans Response ==
/// Returned verbatim for the client-side gating UI.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlansResponse {
    pub plans: Vec<Plan>,
    pub current_plan: Option<Plan>,
    pub can_create_post: QuotaDecision,
    pub limit_info: Option<LimitSummary>,
}

// == Dashboard Stats ==
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_posts: usize,
    pub active_posts: usize,
    pub pending_posts: usize,
    pub total_views: u64,
    pub plan_name: String,
    pub can_create_post: bool,
    pub limit_info: Option<LimitSummary>,
}

// == Profile Response ==
/// Public profile page: the author and their published listings.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub user: PublicUser,
    pub posts: Vec<Post>,
}

// == Health Response ==
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub cache: CacheStats,
}

impl HealthResponse {
    pub fn healthy(cache: CacheStats) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
            cache,
        }
    }
}

// == Error Response ==
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PostStatus, Privacy};

    fn sample_post() -> PostWithRelations {
        PostWithRelations {
            post: Post {
                id: "2".into(),
                user_id: "2".into(),
                title: "iPhone 14 Pro Max".into(),
                description: "Barely used".into(),
                category_id: Some("5".into()),
                price: 1200.0,
                location: Some("Melbourne, VIC".into()),
                latitude: None,
                longitude: None,
                privacy: Privacy::Public,
                status: PostStatus::Approved,
                is_active: true,
                show_business_name: true,
                view_count: 78,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            user: PublicUser {
                id: "2".into(),
                name: Some("Sarah Johnson".into()),
                business_name: Some("Sarah's Electronics".into()),
                avatar_url: None,
                is_verified: true,
            },
            category: Some(Category {
                id: "5".into(),
                name: "Electronics".into(),
                icon: "📱".into(),
                is_service: false,
            }),
        }
    }

    #[test]
    fn test_post_with_relations_flattens_post_fields() {
        let json = serde_json::to_value(sample_post()).unwrap();
        // Post fields sit at the top level, relations nested.
        assert_eq!(json["title"], "iPhone 14 Pro Max");
        assert_eq!(json["user"]["is_verified"], true);
        assert_eq!(json["category"]["name"], "Electronics");
    }

    #[test]
    fn test_post_page_serializes_camel_case() {
        let page = PostPage {
            posts: vec![sample_post()],
            total: 21,
            page: 1,
            limit: 20,
            has_more: true,
        };
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["hasMore"], true);
        assert_eq!(json["total"], 21);
    }

    #[test]
    fn test_health_response_shape() {
        let json = serde_json::to_value(HealthResponse::healthy(CacheStats::new())).unwrap();
        assert_eq!(json["status"], "healthy");
        assert!(json.get("timestamp").is_some());
        assert_eq!(json["cache"]["hits"], 0);
    }
}
