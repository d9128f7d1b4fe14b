//! API Routes
//!
//! Configures the Axum router with all marketplace endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    categories_handler, create_post_handler, dashboard_stats_handler, health_handler,
    list_posts_handler, notifications_handler, plans_handler, post_detail_handler,
    profile_handler, record_view_handler, update_post_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET  /health` - Health and cache stats
/// - `GET  /api/categories` - Product and service categories
/// - `GET  /api/posts` - Browse/search published listings
/// - `POST /api/posts` - Create a listing (quota + verification gated)
/// - `GET  /api/posts/:id` - Listing detail
/// - `PUT  /api/posts/:id` - Owner-checked listing update
/// - `POST /api/posts/:id/view` - Record a view
/// - `GET  /api/plans` - Plans plus the caller's quota decision
/// - `GET  /api/dashboard/stats` - Per-user dashboard counters
/// - `GET  /api/notifications` - Per-user notifications
/// - `GET  /api/profile/:id` - Public profile with published listings
///
/// # Middleware
/// - CORS: allows any origin (the UI is served from another host)
/// - Tracing: logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/categories", get(categories_handler))
        .route(
            "/api/posts",
            get(list_posts_handler).post(create_post_handler),
        )
        .route(
            "/api/posts/:id",
            get(post_detail_handler).put(update_post_handler),
        )
        .route("/api/posts/:id/view", post(record_view_handler))
        .route("/api/plans", get(plans_handler))
        .route("/api/dashboard/stats", get(dashboard_stats_handler))
        .route("/api/notifications", get(notifications_handler))
        .route("/api/profile/:id", get(profile_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
