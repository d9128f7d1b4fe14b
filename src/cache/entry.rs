//! Cache Entry Module
//!
//! A single cached response payload with its expiry window.

use std::time::{Duration, Instant};

use serde_json::Value;

// == Cache Entry ==
/// One cached value together with the moment it was stored and its TTL.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The cached JSON payload
    pub value: Value,
    /// When the entry was stored (monotonic)
    pub stored_at: Instant,
    /// Maximum age before the entry is treated as absent
    pub ttl: Duration,
}

impl CacheEntry {
    /// Creates an entry stamped with the current instant.
    pub fn new(value: Value, ttl: Duration) -> Self {
        Self {
            value,
            stored_at: Instant::now(),
            ttl,
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived its TTL.
    ///
    /// An entry is valid while `elapsed <= ttl`; it expires once its age
    /// strictly exceeds the TTL. An expired entry must never be returned
    /// to a caller.
    pub fn is_expired(&self) -> bool {
        self.stored_at.elapsed() > self.ttl
    }

    /// Remaining lifetime, or `Duration::ZERO` once expired.
    pub fn remaining(&self) -> Duration {
        self.ttl.saturating_sub(self.stored_at.elapsed())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fresh_entry_is_valid() {
        let entry = CacheEntry::new(json!({"posts": []}), Duration::from_secs(60));
        assert!(!entry.is_expired());
        assert!(entry.remaining() > Duration::ZERO);
    }

    #[test]
    fn test_entry_expires_after_ttl() {
        let entry = CacheEntry {
            value: json!("stale"),
            stored_at: Instant::now() - Duration::from_millis(150),
            ttl: Duration::from_millis(100),
        };
        assert!(entry.is_expired());
        assert_eq!(entry.remaining(), Duration::ZERO);
    }

    #[test]
    fn test_entry_not_expired_before_ttl() {
        let entry = CacheEntry {
            value: json!(1),
            stored_at: Instant::now() - Duration::from_secs(10),
            ttl: Duration::from_secs(3600),
        };
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_remaining_counts_down() {
        let entry = CacheEntry {
            value: json!(null),
            stored_at: Instant::now() - Duration::from_secs(2),
            ttl: Duration::from_secs(10),
        };
        let remaining = entry.remaining();
        assert!(remaining <= Duration::from_secs(8));
        assert!(remaining > Duration::from_secs(6));
    }
}
