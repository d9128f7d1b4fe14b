//! Response Cache Module
//!
//! Best-effort memoization layer for read-heavy endpoints: a key/value map
//! with per-entry TTL, lazy eviction on read and manual invalidation.
//! Never a source of truth — every caller falls through to the store on a
//! miss.

use std::collections::HashMap;
use std::time::Duration;

use serde_json::Value;

use crate::cache::{CacheEntry, CacheStats};

/// TTL applied when `set` is called without an explicit one.
pub const DEFAULT_TTL_MINUTES: u64 = 5;

// == Response Cache ==
/// In-process TTL cache keyed by opaque strings.
///
/// Construction takes no external dependencies so tests can create
/// isolated instances; the periodic sweep is started separately (see
/// `tasks::spawn_sweep_task`), never as a side effect of construction.
#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: HashMap<String, CacheEntry>,
    stats: CacheStats,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    // == Set ==
    /// Stores `value` under `key` for `ttl_minutes` (default 5 when
    /// `None`). Overwrites any prior entry at the same key
    /// unconditionally; accepts any key and value.
    pub fn set(&mut self, key: impl Into<String>, value: Value, ttl_minutes: Option<u64>) {
        let minutes = ttl_minutes.unwrap_or(DEFAULT_TTL_MINUTES);
        self.set_with_ttl(key, value, Duration::from_secs(minutes * 60));
    }

    /// Duration-precision variant of [`set`](Self::set), for callers (and
    /// tests) that need sub-minute TTLs.
    pub fn set_with_ttl(&mut self, key: impl Into<String>, value: Value, ttl: Duration) {
        self.entries.insert(key.into(), CacheEntry::new(value, ttl));
        self.stats.set_entries(self.entries.len());
    }

    // == Get ==
    /// Returns the stored value if present and not expired. An expired
    /// entry is deleted as a side effect of the read before reporting
    /// absence.
    pub fn get(&mut self, key: &str) -> Option<Value> {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.entries.remove(key);
                self.stats.set_entries(self.entries.len());
                self.stats.record_expired_read();
                None
            }
            Some(entry) => {
                let value = entry.value.clone();
                self.stats.record_hit();
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Delete ==
    /// Removes the entry if present; a no-op on absent keys.
    pub fn delete(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.stats.set_entries(self.entries.len());
        }
    }

    // == Clear ==
    /// Removes all entries. Write-path handlers call this after a
    /// successful write so subsequent reads are not served stale lists.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.set_entries(0);
    }

    // == Sweep ==
    /// Removes every expired entry and returns the count. Uses the same
    /// expiry predicate as the read path; run periodically so entries
    /// that are never re-read cannot grow memory unboundedly.
    pub fn sweep(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        self.stats.set_entries(self.entries.len());
        before - self.entries.len()
    }

    // == Stats ==
    /// Current counters, with the entry count refreshed.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_entries(self.entries.len());
        stats
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
