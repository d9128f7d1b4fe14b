//! Data models
//!
//! Domain records (users, plans, posts, categories, notifications) and
//! the request/response DTOs of the HTTP API.

pub mod domain;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use domain::{
    Category, Notification, Plan, Post, PostStatus, Privacy, PublicUser, SubscriptionStatus,
    User, VerificationStatus,
};
pub use requests::{CreatePostRequest, PostQuery, SortBy, UpdatePostRequest, UserQuery};
pub use responses::{
    CategoriesResponse, DashboardStats, ErrorResponse, HealthResponse, PlansResponse, PostPage,
    PostWithRelations, ProfileResponse,
};
