//! In-memory store backend
//!
//! Holds the full dataset behind one `RwLock`. Post creation re-checks
//! the author's quota inside the write lock, so the counter increments
//! are conditional on a decision made against current state rather than
//! the caller's earlier snapshot.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use crate::models::{
    Category, CreatePostRequest, Notification, Plan, Post, PostQuery, PostStatus, PostPage,
    PostWithRelations, Privacy, PublicUser, SortBy, UpdatePostRequest, User,
};
use crate::policy;
use crate::store::{MarketStore, Result, StoreError};

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates, in kilometres.
fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

#[derive(Debug)]
struct Inner {
    plans: Vec<Plan>,
    users: Vec<User>,
    categories: Vec<Category>,
    posts: Vec<Post>,
    notifications: Vec<Notification>,
    next_post_id: u64,
}

// == Memory Store ==
#[derive(Debug)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// An empty store; mainly useful in tests.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                plans: Vec::new(),
                users: Vec::new(),
                categories: Vec::new(),
                posts: Vec::new(),
                notifications: Vec::new(),
                next_post_id: 1,
            }),
        }
    }

    /// A store populated with the fixture dataset.
    pub fn seeded() -> Self {
        Self {
            inner: RwLock::new(Inner {
                plans: super::seed::plans(),
                users: super::seed::users(),
                categories: super::seed::categories(),
                posts: super::seed::posts(),
                notifications: super::seed::notifications(),
                next_post_id: 100,
            }),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Inner {
    fn join(&self, post: &Post) -> PostWithRelations {
        let user = self
            .users
            .iter()
            .find(|u| u.id == post.user_id)
            .map(PublicUser::from)
            .unwrap_or_else(|| PublicUser {
                id: post.user_id.clone(),
                name: None,
                business_name: None,
                avatar_url: None,
                is_verified: false,
            });
        let category = post
            .category_id
            .as_deref()
            .and_then(|id| self.categories.iter().find(|c| c.id == id))
            .cloned();
        PostWithRelations {
            post: post.clone(),
            user,
            category,
        }
    }
}

impl MarketStore for MemoryStore {
    fn categories(&self) -> Vec<Category> {
        self.read().categories.clone()
    }

    fn plans(&self) -> Vec<Plan> {
        self.read().plans.clone()
    }

    fn plan(&self, plan_id: &str) -> Option<Plan> {
        self.read().plans.iter().find(|p| p.id == plan_id).cloned()
    }

    fn user(&self, user_id: &str) -> Option<User> {
        self.read().users.iter().find(|u| u.id == user_id).cloned()
    }

    fn list_posts(&self, query: &PostQuery) -> PostPage {
        let inner = self.read();
        let mut matches: Vec<&Post> = inner.posts.iter().filter(|p| p.is_published()).collect();

        if let Some(search) = &query.search {
            let needle = search.trim().to_lowercase();
            if !needle.is_empty() {
                matches.retain(|p| {
                    p.title.to_lowercase().contains(&needle)
                        || p.description.to_lowercase().contains(&needle)
                });
            }
        }
        if let Some(category) = &query.category {
            matches.retain(|p| p.category_id.as_deref() == Some(category.as_str()));
        }
        if let Some(location) = &query.location {
            let needle = location.trim().to_lowercase();
            matches.retain(|p| {
                p.location
                    .as_deref()
                    .map(|l| l.to_lowercase().contains(&needle))
                    .unwrap_or(false)
            });
        }
        if let (Some(lat), Some(lon), Some(max_km)) =
            (query.user_lat, query.user_lon, query.max_distance)
        {
            // Listings without coordinates cannot satisfy a distance
            // filter.
            matches.retain(|p| match (p.latitude, p.longitude) {
                (Some(p_lat), Some(p_lon)) => haversine_km(lat, lon, p_lat, p_lon) <= max_km,
                _ => false,
            });
        }

        match query.sort_by {
            SortBy::PriceLow => matches.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SortBy::PriceHigh => matches.sort_by(|a, b| b.price.total_cmp(&a.price)),
            SortBy::Newest => matches.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        }

        let total = matches.len();
        let offset = query.offset();
        let posts = matches
            .into_iter()
            .skip(offset)
            .take(query.limit as usize)
            .map(|p| inner.join(p))
            .collect();

        PostPage {
            posts,
            total,
            page: query.page.max(1),
            limit: query.limit,
            has_more: total > offset + query.limit as usize,
        }
    }

    fn post(&self, post_id: &str) -> Option<PostWithRelations> {
        let inner = self.read();
        inner
            .posts
            .iter()
            .find(|p| p.id == post_id)
            .map(|p| inner.join(p))
    }

    fn user_posts(&self, user_id: &str) -> Vec<Post> {
        self.read()
            .posts
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect()
    }

    fn create_post(&self, request: &CreatePostRequest, status: PostStatus) -> Result<Post> {
        let mut inner = self.write();

        let user_idx = inner
            .users
            .iter()
            .position(|u| u.id == request.user_id)
            .ok_or_else(|| StoreError::UserNotFound(request.user_id.clone()))?;

        // Quota re-check against current counters, atomic with the
        // increments below. A caller's earlier snapshot may be stale.
        let user = &inner.users[user_idx];
        let plan = inner.plans.iter().find(|p| p.id == user.plan_id);
        let decision = policy::decide(Some(user), plan);
        if let Some(reason) = decision.reason {
            return Err(StoreError::QuotaDenied(reason));
        }

        let now = Utc::now();
        let id = format!("post-{}", inner.next_post_id);
        inner.next_post_id += 1;

        let post = Post {
            id,
            user_id: request.user_id.clone(),
            title: request.title.trim().to_string(),
            description: request.description.trim().to_string(),
            category_id: request.category_id.clone(),
            price: request.price,
            location: request.location.clone(),
            latitude: request.latitude,
            longitude: request.longitude,
            privacy: request.privacy.unwrap_or(Privacy::Public),
            status,
            is_active: true,
            show_business_name: request.show_business_name,
            view_count: 0,
            created_at: now,
            updated_at: now,
        };
        inner.posts.push(post.clone());

        let user = &mut inner.users[user_idx];
        user.total_posts_count += 1;
        if status == PostStatus::Approved {
            user.active_posts_count += 1;
        }

        Ok(post)
    }

    fn update_post(&self, post_id: &str, request: &UpdatePostRequest) -> Result<Post> {
        let mut inner = self.write();

        let idx = inner
            .posts
            .iter()
            .position(|p| p.id == post_id)
            .ok_or_else(|| StoreError::PostNotFound(post_id.to_string()))?;
        if inner.posts[idx].user_id != request.user_id {
            return Err(StoreError::NotOwner {
                user_id: request.user_id.clone(),
                post_id: post_id.to_string(),
            });
        }

        let was_counted = {
            let post = &inner.posts[idx];
            post.status == PostStatus::Approved && post.is_active
        };

        {
            let post = &mut inner.posts[idx];
            if let Some(title) = &request.title {
                post.title = title.trim().to_string();
            }
            if let Some(description) = &request.description {
                post.description = description.trim().to_string();
            }
            if let Some(price) = request.price {
                post.price = price;
            }
            if let Some(location) = &request.location {
                post.location = Some(location.clone());
            }
            if let Some(privacy) = request.privacy {
                post.privacy = privacy;
            }
            if let Some(is_active) = request.is_active {
                post.is_active = is_active;
            }
            post.updated_at = Utc::now();
        }

        let now_counted = {
            let post = &inner.posts[idx];
            post.status == PostStatus::Approved && post.is_active
        };
        if was_counted != now_counted {
            let owner_id = inner.posts[idx].user_id.clone();
            if let Some(user) = inner.users.iter_mut().find(|u| u.id == owner_id) {
                if now_counted {
                    user.active_posts_count += 1;
                } else {
                    user.active_posts_count = user.active_posts_count.saturating_sub(1);
                }
            }
        }

        Ok(inner.posts[idx].clone())
    }

    fn record_view(&self, post_id: &str) -> Result<u64> {
        let mut inner = self.write();
        let post = inner
            .posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| StoreError::PostNotFound(post_id.to_string()))?;
        post.view_count += 1;
        Ok(post.view_count)
    }

    fn notifications(&self, user_id: &str) -> Vec<Notification> {
        self.read()
            .notifications
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::DenyReason;

    fn create_request(user_id: &str) -> CreatePostRequest {
        CreatePostRequest {
            user_id: user_id.into(),
            title: "Mountain bike".into(),
            description: "Hardtail, recently serviced".into(),
            category_id: Some("7".into()),
            price: 450.0,
            location: Some("Newtown, NSW".into()),
            latitude: None,
            longitude: None,
            privacy: None,
            show_business_name: false,
        }
    }

    #[test]
    fn test_list_returns_only_published_posts() {
        let store = MemoryStore::seeded();

        let page = store.list_posts(&PostQuery::default());

        // Seed: post 3 is deactivated, post 4 is pending review.
        assert_eq!(page.total, 4);
        assert!(page.posts.iter().all(|p| p.post.is_published()));
    }

    #[test]
    fn test_list_search_matches_title_and_description() {
        let store = MemoryStore::seeded();
        let query = PostQuery {
            search: Some("iphone".into()),
            ..PostQuery::default()
        };

        let page = store.list_posts(&query);

        assert_eq!(page.total, 1);
        assert_eq!(page.posts[0].post.id, "2");
    }

    #[test]
    fn test_list_category_filter() {
        let store = MemoryStore::seeded();
        let query = PostQuery {
            category: Some("5".into()),
            ..PostQuery::default()
        };

        let page = store.list_posts(&query);

        assert_eq!(page.total, 2);
        assert!(page.posts.iter().all(|p| p.post.category_id.as_deref() == Some("5")));
    }

    #[test]
    fn test_list_sorts_by_price() {
        let store = MemoryStore::seeded();
        let query = PostQuery {
            sort_by: SortBy::PriceLow,
            ..PostQuery::default()
        };

        let page = store.list_posts(&query);

        let prices: Vec<f64> = page.posts.iter().map(|p| p.post.price).collect();
        let mut sorted = prices.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));
        assert_eq!(prices, sorted);
    }

    #[test]
    fn test_list_distance_filter_keeps_nearby_posts() {
        let store = MemoryStore::seeded();
        // Sydney CBD; Melbourne listings are ~700 km away.
        let query = PostQuery {
            user_lat: Some(-33.8688),
            user_lon: Some(151.2093),
            max_distance: Some(50.0),
            ..PostQuery::default()
        };

        let page = store.list_posts(&query);

        assert!(page.total >= 1);
        assert!(page.posts.iter().all(|p| {
            let lat = p.post.latitude.unwrap();
            let lon = p.post.longitude.unwrap();
            haversine_km(-33.8688, 151.2093, lat, lon) <= 50.0
        }));
        assert!(!page.posts.iter().any(|p| p.post.id == "2"));
    }

    #[test]
    fn test_list_pagination_windows_results() {
        let store = MemoryStore::seeded();
        let first = store.list_posts(&PostQuery {
            limit: 2,
            ..PostQuery::default()
        });
        let second = store.list_posts(&PostQuery {
            page: 2,
            limit: 2,
            ..PostQuery::default()
        });

        assert_eq!(first.posts.len(), 2);
        assert!(first.has_more);
        assert_eq!(second.posts.len(), 2);
        assert!(!second.has_more);
        assert_ne!(first.posts[0].post.id, second.posts[0].post.id);
    }

    #[test]
    fn test_post_joins_author_and_category() {
        let store = MemoryStore::seeded();

        let detail = store.post("2").unwrap();

        assert_eq!(detail.user.name.as_deref(), Some("Sarah Johnson"));
        assert!(detail.user.is_verified);
        assert_eq!(detail.category.as_ref().unwrap().name, "Electronics");
    }

    #[test]
    fn test_create_post_increments_counters() {
        let store = MemoryStore::seeded();
        let before = store.user("4").unwrap();

        let post = store
            .create_post(&create_request("4"), PostStatus::Approved)
            .unwrap();

        let after = store.user("4").unwrap();
        assert_eq!(after.total_posts_count, before.total_posts_count + 1);
        assert_eq!(after.active_posts_count, before.active_posts_count + 1);
        assert_eq!(post.status, PostStatus::Approved);
        assert!(store.post(&post.id).is_some());
    }

    #[test]
    fn test_create_pending_post_counts_total_only() {
        let store = MemoryStore::seeded();
        let before = store.user("5").unwrap();

        store
            .create_post(&create_request("5"), PostStatus::Pending)
            .unwrap();

        let after = store.user("5").unwrap();
        assert_eq!(after.total_posts_count, before.total_posts_count + 1);
        assert_eq!(after.active_posts_count, before.active_posts_count);
    }

    #[test]
    fn test_create_post_rechecks_quota_under_lock() {
        let store = MemoryStore::seeded();

        // User 1 sits at their Free-plan active limit already.
        let err = store
            .create_post(&create_request("1"), PostStatus::Approved)
            .unwrap_err();

        match err {
            StoreError::QuotaDenied(reason) => {
                assert_eq!(reason, DenyReason::ActiveLimitReached(1))
            }
            other => panic!("expected quota denial, got {other:?}"),
        }
        // No counters moved and no post appeared.
        assert_eq!(store.user("1").unwrap().total_posts_count, 3);
        assert_eq!(store.user_posts("1").len(), 2);
    }

    #[test]
    fn test_create_post_unknown_user() {
        let store = MemoryStore::seeded();
        let err = store
            .create_post(&create_request("ghost"), PostStatus::Pending)
            .unwrap_err();
        assert!(matches!(err, StoreError::UserNotFound(_)));
    }

    #[test]
    fn test_update_post_requires_ownership() {
        let store = MemoryStore::seeded();
        let request = UpdatePostRequest {
            user_id: "2".into(),
            title: Some("Hijacked".into()),
            ..UpdatePostRequest::default()
        };

        let err = store.update_post("1", &request).unwrap_err();

        assert!(matches!(err, StoreError::NotOwner { .. }));
        assert_eq!(store.post("1").unwrap().post.title, "2019 Toyota Camry - Excellent Condition");
    }

    #[test]
    fn test_update_post_applies_partial_changes() {
        let store = MemoryStore::seeded();
        let request = UpdatePostRequest {
            user_id: "1".into(),
            price: Some(23500.0),
            ..UpdatePostRequest::default()
        };

        let updated = store.update_post("1", &request).unwrap();

        assert_eq!(updated.price, 23500.0);
        assert_eq!(updated.title, "2019 Toyota Camry - Excellent Condition");
    }

    #[test]
    fn test_deactivating_post_releases_active_slot() {
        let store = MemoryStore::seeded();
        assert_eq!(store.user("1").unwrap().active_posts_count, 1);

        let request = UpdatePostRequest {
            user_id: "1".into(),
            is_active: Some(false),
            ..UpdatePostRequest::default()
        };
        store.update_post("1", &request).unwrap();

        assert_eq!(store.user("1").unwrap().active_posts_count, 0);

        // Reactivating takes the slot back.
        let request = UpdatePostRequest {
            user_id: "1".into(),
            is_active: Some(true),
            ..UpdatePostRequest::default()
        };
        store.update_post("1", &request).unwrap();
        assert_eq!(store.user("1").unwrap().active_posts_count, 1);
    }

    #[test]
    fn test_record_view_increments() {
        let store = MemoryStore::seeded();
        let before = store.post("2").unwrap().post.view_count;

        let count = store.record_view("2").unwrap();

        assert_eq!(count, before + 1);
        assert!(matches!(
            store.record_view("missing"),
            Err(StoreError::PostNotFound(_))
        ));
    }

    #[test]
    fn test_notifications_are_scoped_to_user() {
        let store = MemoryStore::seeded();
        assert_eq!(store.notifications("1").len(), 2);
        assert_eq!(store.notifications("4").len(), 0);
    }

    #[test]
    fn test_haversine_known_distance() {
        // Sydney to Melbourne is roughly 714 km.
        let km = haversine_km(-33.8688, 151.2093, -37.8136, 144.9631);
        assert!((700.0..730.0).contains(&km), "got {km}");
    }
}
