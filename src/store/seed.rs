//! Seed dataset
//!
//! The fixture records the in-memory backend starts from: two plans,
//! a handful of users in different quota states, the category tree and
//! some listings.

use chrono::{DateTime, TimeZone, Utc};

use crate::models::{
    Category, Notification, Plan, Post, PostStatus, Privacy, SubscriptionStatus, User,
    VerificationStatus,
};

fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

pub fn plans() -> Vec<Plan> {
    vec![
        Plan {
            id: "free".into(),
            name: "Free".into(),
            price: 0.0,
            currency: "AUD".into(),
            max_active_posts: Some(1),
            max_total_posts: Some(5),
            priority_verification: false,
            features: vec![
                "1 active listing".into(),
                "5 total posts lifetime".into(),
                "Basic support".into(),
            ],
        },
        Plan {
            id: "premium".into(),
            name: "Premium".into(),
            price: 25.0,
            currency: "AUD".into(),
            max_active_posts: None,
            max_total_posts: None,
            priority_verification: true,
            features: vec![
                "Unlimited active listings".into(),
                "Unlimited posts".into(),
                "Priority verification".into(),
                "Premium support".into(),
                "Featured listings".into(),
            ],
        },
    ]
}

pub fn users() -> Vec<User> {
    vec![
        User {
            id: "1".into(),
            name: Some("John Smith".into()),
            business_name: None,
            email: Some("john@example.com".into()),
            avatar_url: None,
            is_verified: false,
            verification_status: VerificationStatus::Pending,
            plan_id: "free".into(),
            subscription_status: SubscriptionStatus::Active,
            active_posts_count: 1,
            total_posts_count: 3,
            created_at: ts(2024, 1, 15, 10, 0),
        },
        User {
            id: "2".into(),
            name: Some("Sarah Johnson".into()),
            business_name: Some("Sarah's Electronics".into()),
            email: Some("sarah@example.com".into()),
            avatar_url: None,
            is_verified: true,
            verification_status: VerificationStatus::Approved,
            plan_id: "premium".into(),
            subscription_status: SubscriptionStatus::Active,
            active_posts_count: 3,
            total_posts_count: 8,
            created_at: ts(2024, 1, 10, 14, 30),
        },
        User {
            id: "3".into(),
            name: Some("Mike Wilson".into()),
            business_name: None,
            email: Some("mike@example.com".into()),
            avatar_url: None,
            is_verified: false,
            verification_status: VerificationStatus::Pending,
            plan_id: "free".into(),
            subscription_status: SubscriptionStatus::Active,
            active_posts_count: 1,
            total_posts_count: 1,
            created_at: ts(2024, 1, 20, 9, 15),
        },
        User {
            id: "4".into(),
            name: Some("Emma Davis".into()),
            business_name: None,
            email: Some("emma@example.com".into()),
            avatar_url: None,
            is_verified: true,
            verification_status: VerificationStatus::Approved,
            plan_id: "premium".into(),
            subscription_status: SubscriptionStatus::Active,
            active_posts_count: 0,
            total_posts_count: 0,
            created_at: ts(2024, 1, 1, 0, 0),
        },
        User {
            id: "5".into(),
            name: Some("Liam Brown".into()),
            business_name: None,
            email: Some("liam@example.com".into()),
            avatar_url: None,
            is_verified: false,
            verification_status: VerificationStatus::Pending,
            plan_id: "free".into(),
            subscription_status: SubscriptionStatus::Active,
            active_posts_count: 0,
            total_posts_count: 0,
            created_at: ts(2024, 1, 25, 13, 40),
        },
    ]
}

pub fn categories() -> Vec<Category> {
    let product = [
        ("1", "Cars", "🚗"),
        ("2", "Living", "🏠"),
        ("3", "Furniture", "🪑"),
        ("5", "Electronics", "📱"),
        ("6", "Fashion", "👕"),
        ("7", "Sports", "⚽"),
        ("8", "Books", "📚"),
        ("9", "Other", "📦"),
    ];
    let service = [
        ("s1", "Web Dev", "💻"),
        ("s2", "Cleaning", "🧹"),
        ("s3", "Tutoring", "📚"),
        ("s4", "Fitness", "💪"),
        ("s5", "Beauty", "💄"),
        ("s6", "Handyman", "🔧"),
        ("s7", "Photography", "📸"),
        ("s8", "Music", "🎵"),
    ];

    product
        .into_iter()
        .map(|(id, name, icon)| category(id, name, icon, false))
        .chain(
            service
                .into_iter()
                .map(|(id, name, icon)| category(id, name, icon, true)),
        )
        .collect()
}

fn category(id: &str, name: &str, icon: &str, is_service: bool) -> Category {
    Category {
        id: id.into(),
        name: name.into(),
        icon: icon.into(),
        is_service,
    }
}

pub fn posts() -> Vec<Post> {
    vec![
        Post {
            id: "1".into(),
            user_id: "1".into(),
            title: "2019 Toyota Camry - Excellent Condition".into(),
            description: "Well-maintained Toyota Camry with low mileage. Full service history available.".into(),
            category_id: Some("1".into()),
            price: 25000.0,
            location: Some("Sydney, NSW".into()),
            latitude: Some(-33.8688),
            longitude: Some(151.2093),
            privacy: Privacy::Public,
            status: PostStatus::Approved,
            is_active: true,
            show_business_name: false,
            view_count: 45,
            created_at: ts(2024, 1, 16, 10, 0),
            updated_at: ts(2024, 1, 16, 10, 0),
        },
        Post {
            id: "2".into(),
            user_id: "2".into(),
            title: "iPhone 14 Pro Max - Like New".into(),
            description: "Barely used iPhone 14 Pro Max in pristine condition. Original box and accessories.".into(),
            category_id: Some("5".into()),
            price: 1200.0,
            location: Some("Melbourne, VIC".into()),
            latitude: Some(-37.8136),
            longitude: Some(144.9631),
            privacy: Privacy::Public,
            status: PostStatus::Approved,
            is_active: true,
            show_business_name: true,
            view_count: 78,
            created_at: ts(2024, 1, 18, 14, 30),
            updated_at: ts(2024, 1, 18, 14, 30),
        },
        Post {
            id: "3".into(),
            user_id: "1".into(),
            title: "Modern Dining Table Set".into(),
            description: "Oak dining table with 6 chairs. Minor wear but very sturdy.".into(),
            category_id: Some("3".into()),
            price: 800.0,
            location: Some("Parramatta, NSW".into()),
            latitude: Some(-33.8150),
            longitude: Some(151.0000),
            privacy: Privacy::Public,
            status: PostStatus::Approved,
            is_active: false,
            show_business_name: false,
            view_count: 23,
            created_at: ts(2024, 1, 19, 9, 15),
            updated_at: ts(2024, 1, 19, 9, 15),
        },
        Post {
            id: "4".into(),
            user_id: "3".into(),
            title: "Professional Web Development Services".into(),
            description: "Experienced full-stack developer offering custom website development.".into(),
            category_id: Some("s1".into()),
            price: 100.0,
            location: Some("Bondi, NSW".into()),
            latitude: Some(-33.8915),
            longitude: Some(151.2767),
            privacy: Privacy::Public,
            status: PostStatus::Pending,
            is_active: true,
            show_business_name: false,
            view_count: 12,
            created_at: ts(2024, 1, 20, 16, 45),
            updated_at: ts(2024, 1, 20, 16, 45),
        },
        Post {
            id: "5".into(),
            user_id: "2".into(),
            title: "Vintage Leather Jacket".into(),
            description: "Authentic vintage leather jacket from the 80s. Size Medium.".into(),
            category_id: Some("6".into()),
            price: 150.0,
            location: Some("Surry Hills, NSW".into()),
            latitude: Some(-33.8886),
            longitude: Some(151.2094),
            privacy: Privacy::Public,
            status: PostStatus::Approved,
            is_active: true,
            show_business_name: false,
            view_count: 34,
            created_at: ts(2024, 1, 21, 11, 20),
            updated_at: ts(2024, 1, 21, 11, 20),
        },
        Post {
            id: "6".into(),
            user_id: "2".into(),
            title: "Samsung 55\" Smart TV".into(),
            description: "4K UHD Smart TV, two years old, perfect working order.".into(),
            category_id: Some("5".into()),
            price: 600.0,
            location: Some("Richmond, VIC".into()),
            latitude: Some(-37.8183),
            longitude: Some(145.0000),
            privacy: Privacy::Public,
            status: PostStatus::Approved,
            is_active: true,
            show_business_name: true,
            view_count: 51,
            created_at: ts(2024, 1, 22, 8, 5),
            updated_at: ts(2024, 1, 22, 8, 5),
        },
    ]
}

pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: "n1".into(),
            user_id: "1".into(),
            kind: "post_approved".into(),
            title: "Post approved".into(),
            content: "Your listing \"2019 Toyota Camry\" is now live.".into(),
            is_read: false,
            created_at: ts(2024, 1, 16, 10, 5),
        },
        Notification {
            id: "n2".into(),
            user_id: "1".into(),
            kind: "message".into(),
            title: "New message".into(),
            content: "Sarah Johnson sent you a message about your listing.".into(),
            is_read: true,
            created_at: ts(2024, 1, 17, 12, 0),
        },
        Notification {
            id: "n3".into(),
            user_id: "3".into(),
            kind: "verification".into(),
            title: "Verification pending".into(),
            content: "Your identity verification is being reviewed.".into(),
            is_read: false,
            created_at: ts(2024, 1, 20, 17, 0),
        },
    ]
}
