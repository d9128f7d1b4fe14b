//! Request DTOs
//!
//! Incoming HTTP bodies and query parameters.

use serde::Deserialize;

use crate::models::Privacy;

// == Sort Order ==
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum SortBy {
    #[default]
    #[serde(rename = "newest")]
    Newest,
    #[serde(rename = "price-low")]
    PriceLow,
    #[serde(rename = "price-high")]
    PriceHigh,
}

impl SortBy {
    fn token(self) -> &'static str {
        match self {
            SortBy::Newest => "newest",
            SortBy::PriceLow => "price-low",
            SortBy::PriceHigh => "price-high",
        }
    }
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    20
}

// == Post Query ==
/// Filter/sort/pagination parameters for `GET /api/posts`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostQuery {
    pub page: u32,
    pub limit: u32,
    pub search: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub sort_by: SortBy,
    pub user_lat: Option<f64>,
    pub user_lon: Option<f64>,
    /// Maximum distance from (user_lat, user_lon) in kilometres.
    pub max_distance: Option<f64>,
}

impl Default for PostQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
            search: None,
            category: None,
            location: None,
            sort_by: SortBy::default(),
            user_lat: None,
            user_lon: None,
            max_distance: None,
        }
    }
}

impl PostQuery {
    /// First row index for the requested page.
    pub fn offset(&self) -> usize {
        (self.page.max(1) as usize - 1) * self.limit as usize
    }

    // == Cache Token ==
    /// The normalized parameter set, in fixed field order, used to build
    /// the list cache key. Every field participates so two different
    /// queries can never collide on the same slot.
    pub fn cache_token(&self) -> String {
        fn opt_str(value: &Option<String>) -> String {
            value
                .as_deref()
                .map(|s| s.trim().to_lowercase())
                .unwrap_or_default()
        }
        fn opt_num(value: Option<f64>) -> String {
            value.map(|v| v.to_string()).unwrap_or_default()
        }

        format!(
            "page={}&limit={}&search={}&category={}&location={}&sort={}&lat={}&lon={}&dist={}",
            self.page.max(1),
            self.limit,
            opt_str(&self.search),
            opt_str(&self.category),
            opt_str(&self.location),
            self.sort_by.token(),
            opt_num(self.user_lat),
            opt_num(self.user_lon),
            opt_num(self.max_distance),
        )
    }
}

// == User Query ==
/// `?userId=…` — the caller's identity. Authentication is an external
/// collaborator; the id is trusted as-is.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQuery {
    pub user_id: String,
}

// == Create Post Request ==
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePostRequest {
    pub user_id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub category_id: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub privacy: Option<Privacy>,
    #[serde(default)]
    pub show_business_name: bool,
}

impl CreatePostRequest {
    /// Returns an error message if the request is invalid, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.title.trim().is_empty() {
            return Some("Title cannot be empty".to_string());
        }
        if self.description.trim().is_empty() {
            return Some("Description cannot be empty".to_string());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Some("Price must be a non-negative number".to_string());
        }
        None
    }
}

// == Update Post Request ==
/// Owner-checked partial update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePostRequest {
    pub user_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub privacy: Option<Privacy>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl UpdatePostRequest {
    pub fn validate(&self) -> Option<String> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Some("Title cannot be empty".to_string());
            }
        }
        if let Some(description) = &self.description {
            if description.trim().is_empty() {
                return Some("Description cannot be empty".to_string());
            }
        }
        if let Some(price) = self.price {
            if !price.is_finite() || price < 0.0 {
                return Some("Price must be a non-negative number".to_string());
            }
        }
        None
    }
}
