//! API Handlers
//!
//! One handler per endpoint. Read paths consult the response cache
//! before the store and populate it on a miss with the resource's TTL;
//! write paths invalidate after a successful write so subsequent reads
//! are never served stale data. The cache is an accelerator only —
//! every handler works identically against a cold cache.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tokio::sync::RwLock;

use crate::cache::{keys, ResponseCache};
use crate::error::{ApiError, Result};
use crate::models::{
    CategoriesResponse, CreatePostRequest, DashboardStats, HealthResponse, PlansResponse,
    PostQuery, PostStatus, ProfileResponse, UpdatePostRequest, UserQuery,
};
use crate::policy;
use crate::store::{MarketStore, MemoryStore};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe response cache
    pub cache: Arc<RwLock<ResponseCache>>,
    /// Authoritative data source
    pub store: Arc<dyn MarketStore>,
}

impl AppState {
    /// Creates state around the given backend with a fresh, empty cache.
    pub fn new(store: Arc<dyn MarketStore>) -> Self {
        Self {
            cache: Arc::new(RwLock::new(ResponseCache::new())),
            store,
        }
    }

    /// State over the seeded in-memory backend.
    pub fn seeded() -> Self {
        Self::new(Arc::new(MemoryStore::seeded()))
    }

    async fn cache_get(&self, key: &str) -> Option<Value> {
        self.cache.write().await.get(key)
    }

    async fn cache_put(&self, key: String, value: Value, ttl_minutes: u64) {
        self.cache.write().await.set(key, value, Some(ttl_minutes));
    }
}

fn to_value<T: serde::Serialize>(payload: &T) -> Result<Value> {
    serde_json::to_value(payload).map_err(|e| ApiError::Internal(e.to_string()))
}

/// Handler for GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let stats = state.cache.read().await.stats();
    Json(HealthResponse::healthy(stats))
}

/// Handler for GET /api/categories
///
/// Product and service categories, listed separately. Near-static, so it
/// gets the longest TTL.
pub async fn categories_handler(State(state): State<AppState>) -> Result<Json<Value>> {
    let key = keys::categories();
    if let Some(hit) = state.cache_get(&key).await {
        return Ok(Json(hit));
    }

    let (categories, services) = state
        .store
        .categories()
        .into_iter()
        .partition(|c| !c.is_service);
    let value = to_value(&CategoriesResponse {
        categories,
        services,
    })?;

    state
        .cache_put(key, value.clone(), keys::CATEGORIES_TTL_MIN)
        .await;
    Ok(Json(value))
}

/// Handler for GET /api/posts
///
/// Published listings, filtered/sorted/paginated. The cache key embeds
/// the normalized query token, so each distinct query gets its own slot.
pub async fn list_posts_handler(
    State(state): State<AppState>,
    Query(query): Query<PostQuery>,
) -> Result<Json<Value>> {
    let key = keys::posts_list(&query.cache_token());
    if let Some(hit) = state.cache_get(&key).await {
        return Ok(Json(hit));
    }

    let page = state.store.list_posts(&query);
    let value = to_value(&page)?;

    state
        .cache_put(key, value.clone(), keys::POSTS_LIST_TTL_MIN)
        .await;
    Ok(Json(value))
}

/// Handler for GET /api/posts/:id
pub async fn post_detail_handler(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<Json<Value>> {
    let key = keys::post_detail(&post_id);
    if let Some(hit) = state.cache_get(&key).await {
        return Ok(Json(hit));
    }

    let detail = state
        .store
        .post(&post_id)
        .ok_or_else(|| ApiError::NotFound(format!("post {post_id}")))?;
    let value = to_value(&detail)?;

    state
        .cache_put(key, value.clone(), keys::POST_DETAIL_TTL_MIN)
        .await;
    Ok(Json(value))
}

/// Handler for POST /api/posts
///
/// Two independent gates apply: the quota decision (deny → 403 with the
/// reason) and the verification gate, which only picks the initial
/// publication state. On success every cached read is invalidated.
pub async fn create_post_handler(
    State(state): State<AppState>,
    Json(request): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<Value>)> {
    if let Some(message) = request.validate() {
        return Err(ApiError::InvalidRequest(message));
    }

    let user = state.store.user(&request.user_id);
    let plan = user.as_ref().and_then(|u| state.store.plan(&u.plan_id));

    let decision = policy::decide(user.as_ref(), plan.as_ref());
    if let Some(reason) = decision.reason {
        return Err(ApiError::Forbidden(reason.to_string()));
    }

    let status = user
        .as_ref()
        .map(policy::initial_post_status)
        .unwrap_or(PostStatus::Pending);

    // The store re-checks the quota under its write lock; a concurrent
    // creation that consumed the last slot surfaces as 403 here too.
    let post = state.store.create_post(&request, status)?;

    state.cache.write().await.clear();

    Ok((StatusCode::CREATED, Json(to_value(&post)?)))
}

/// Handler for PUT /api/posts/:id
pub async fn update_post_handler(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    Json(request): Json<UpdatePostRequest>,
) -> Result<Json<Value>> {
    if let Some(message) = request.validate() {
        return Err(ApiError::InvalidRequest(message));
    }

    let updated = state.store.update_post(&post_id, &request)?;

    {
        let mut cache = state.cache.write().await;
        cache.delete(&keys::post_detail(&post_id));
        // List and dashboard keys are query-shaped; drop everything.
        cache.clear();
    }

    Ok(Json(to_value(&updated)?))
}

/// Handler for POST /api/posts/:id/view
pub async fn record_view_handler(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<Json<Value>> {
    let view_count = state.store.record_view(&post_id)?;

    state
        .cache
        .write()
        .await
        .delete(&keys::post_detail(&post_id));

    Ok(Json(json!({ "id": post_id, "viewCount": view_count })))
}

/// Handler for GET /api/plans
///
/// The quota decision and limit summary are returned verbatim for the
/// client-side gating UI. Unresolved users produce a deny decision, not
/// an error.
pub async fn plans_handler(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<PlansResponse>> {
    let user = state.store.user(&query.user_id);
    let plan = user.as_ref().and_then(|u| state.store.plan(&u.plan_id));

    Ok(Json(PlansResponse {
        plans: state.store.plans(),
        current_plan: plan.clone(),
        can_create_post: policy::decide(user.as_ref(), plan.as_ref()),
        limit_info: policy::limit_summary(user.as_ref(), plan.as_ref()),
    }))
}

/// Handler for GET /api/dashboard/stats
pub async fn dashboard_stats_handler(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<Value>> {
    let key = keys::dashboard_stats(&query.user_id);
    if let Some(hit) = state.cache_get(&key).await {
        return Ok(Json(hit));
    }

    let user = state
        .store
        .user(&query.user_id)
        .ok_or_else(|| ApiError::NotFound(format!("user {}", query.user_id)))?;
    let plan = state.store.plan(&user.plan_id);
    let posts = state.store.user_posts(&user.id);

    let decision = policy::decide(Some(&user), plan.as_ref());
    let limit_info = policy::limit_summary(Some(&user), plan.as_ref());
    let stats = DashboardStats {
        total_posts: posts.len(),
        active_posts: posts
            .iter()
            .filter(|p| p.status == PostStatus::Approved && p.is_active)
            .count(),
        pending_posts: posts
            .iter()
            .filter(|p| p.status == PostStatus::Pending)
            .count(),
        total_views: posts.iter().map(|p| p.view_count).sum(),
        plan_name: plan
            .map(|p| p.name)
            .unwrap_or_else(|| "Free".to_string()),
        can_create_post: decision.can_create,
        limit_info,
    };
    let value = to_value(&stats)?;

    state
        .cache_put(key, value.clone(), keys::DASHBOARD_STATS_TTL_MIN)
        .await;
    Ok(Json(value))
}

/// Handler for GET /api/notifications
pub async fn notifications_handler(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<Value>> {
    let key = keys::notifications(&query.user_id);
    if let Some(hit) = state.cache_get(&key).await {
        return Ok(Json(hit));
    }

    let notifications = state.store.notifications(&query.user_id);
    let value = to_value(&json!({ "notifications": notifications }))?;

    state
        .cache_put(key, value.clone(), keys::NOTIFICATIONS_TTL_MIN)
        .await;
    Ok(Json(value))
}

/// Handler for GET /api/profile/:id
pub async fn profile_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Value>> {
    let key = keys::user_profile(&user_id);
    if let Some(hit) = state.cache_get(&key).await {
        return Ok(Json(hit));
    }

    let user = state
        .store
        .user(&user_id)
        .ok_or_else(|| ApiError::NotFound(format!("user {user_id}")))?;
    let posts = state
        .store
        .user_posts(&user_id)
        .into_iter()
        .filter(|p| p.is_published())
        .collect();
    let value = to_value(&ProfileResponse {
        user: (&user).into(),
        posts,
    })?;

    state
        .cache_put(key, value.clone(), keys::USER_PROFILE_TTL_MIN)
        .await;
    Ok(Json(value))
}
