//! API Module
//!
//! HTTP handlers and routing for the marketplace REST API. Read
//! endpoints are cache-first; write endpoints invalidate the cache after
//! a successful write.

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
