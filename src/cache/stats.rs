//! Cache Statistics Module
//!
//! Counters for cache effectiveness, surfaced on the health endpoint and
//! in sweep logs.

use serde::Serialize;

// == Cache Stats ==
/// Read-path counters for the response cache.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Reads that returned a live entry
    pub hits: u64,
    /// Reads that found nothing under the key
    pub misses: u64,
    /// Reads that found an entry past its TTL (evicted lazily, counted
    /// as misses too)
    pub expired_reads: u64,
    /// Current number of live entries
    pub entries: usize,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// hits / (hits + misses), or 0.0 before any read.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// An expired entry seen on the read path counts as a miss as well:
    /// the caller observes absence either way.
    pub fn record_expired_read(&mut self) {
        self.expired_reads += 1;
        self.misses += 1;
    }

    pub fn set_entries(&mut self, count: usize) {
        self.entries = count;
    }
}
