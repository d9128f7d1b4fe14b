//! Store Module
//!
//! The single data-access seam between handlers and whatever backend
//! holds the records. Handlers depend on the [`MarketStore`] trait only;
//! one implementation exists per backend and the caller selects it. The
//! cache sits in front of this interface and is never the only path to
//! data.

mod memory;
mod seed;

use thiserror::Error;

use crate::models::{
    Category, CreatePostRequest, Notification, Plan, Post, PostQuery, PostStatus, PostPage,
    PostWithRelations, UpdatePostRequest, User,
};
use crate::policy::DenyReason;

pub use memory::MemoryStore;

// == Store Error ==
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Post not found: {0}")]
    PostNotFound(String),
    #[error("User not found: {0}")]
    UserNotFound(String),
    #[error("User {user_id} does not own post {post_id}")]
    NotOwner { user_id: String, post_id: String },
    /// Creation refused by the quota re-check inside the store's write
    /// lock (the conditional-increment guard).
    #[error(transparent)]
    QuotaDenied(#[from] DenyReason),
}

pub type Result<T> = std::result::Result<T, StoreError>;

// == Market Store ==
/// Authoritative data access for the marketplace records.
pub trait MarketStore: Send + Sync {
    /// All categories, product and service alike.
    fn categories(&self) -> Vec<Category>;

    fn plans(&self) -> Vec<Plan>;

    fn plan(&self, plan_id: &str) -> Option<Plan>;

    fn user(&self, user_id: &str) -> Option<User>;

    /// Published listings matching `query`, filtered, sorted and
    /// paginated.
    fn list_posts(&self, query: &PostQuery) -> PostPage;

    /// A single listing with author and category joined on.
    fn post(&self, post_id: &str) -> Option<PostWithRelations>;

    /// Every listing owned by `user_id`, regardless of status.
    fn user_posts(&self, user_id: &str) -> Vec<Post>;

    /// Creates a listing with the given initial status. Re-validates the
    /// author's quota atomically with the counter increments; a denied
    /// re-check returns [`StoreError::QuotaDenied`].
    fn create_post(&self, request: &CreatePostRequest, status: PostStatus) -> Result<Post>;

    /// Owner-checked partial update. Toggling `is_active` on an approved
    /// listing adjusts the author's active-post counter.
    fn update_post(&self, post_id: &str, request: &UpdatePostRequest) -> Result<Post>;

    /// Increments and returns the listing's view count.
    fn record_view(&self, post_id: &str) -> Result<u64>;

    fn notifications(&self, user_id: &str) -> Vec<Notification>;
}
