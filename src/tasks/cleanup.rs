//! Cache Sweep Task
//!
//! Background task that periodically removes expired cache entries so
//! entries that are never re-read cannot grow memory unboundedly. Lazy
//! eviction on the read path handles correctness; this task handles the
//! memory bound. Both use the same expiry predicate.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::ResponseCache;

/// Spawns the periodic cache sweep.
///
/// The sweep must be started explicitly — constructing a cache never
/// starts one. It runs until aborted, takes the write lock only for the
/// duration of one sweep, and keeps looping whatever a single iteration
/// finds. The returned handle is aborted during graceful shutdown.
pub fn spawn_sweep_task(
    cache: Arc<RwLock<ResponseCache>>,
    sweep_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(sweep_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting cache sweep task with interval of {} seconds",
            sweep_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let (removed, stats) = {
                let mut cache_guard = cache.write().await;
                let removed = cache_guard.sweep();
                (removed, cache_guard.stats())
            };

            if removed > 0 {
                info!(
                    "Cache sweep: removed {} expired entries, {} remain (hit rate {:.2})",
                    removed,
                    stats.entries,
                    stats.hit_rate()
                );
            } else {
                debug!(
                    "Cache sweep: nothing expired, {} entries (hit rate {:.2})",
                    stats.entries,
                    stats.hit_rate()
                );
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_sweep_task_removes_expired_entries() {
        let cache = Arc::new(RwLock::new(ResponseCache::new()));

        {
            let mut cache_guard = cache.write().await;
            cache_guard.set_with_ttl("expire_soon", json!("value"), Duration::from_millis(100));
        }

        let handle = spawn_sweep_task(cache.clone(), 1);

        // Wait for the entry to expire and one sweep to run.
        tokio::time::sleep(Duration::from_millis(1500)).await;

        {
            let cache_guard = cache.read().await;
            // The sweep removed it eagerly; no read was needed.
            assert!(cache_guard.is_empty());
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_preserves_live_entries() {
        let cache = Arc::new(RwLock::new(ResponseCache::new()));

        {
            let mut cache_guard = cache.write().await;
            cache_guard.set("long_lived", json!({"total": 4}), Some(60));
        }

        let handle = spawn_sweep_task(cache.clone(), 1);

        tokio::time::sleep(Duration::from_millis(1500)).await;

        {
            let mut cache_guard = cache.write().await;
            assert_eq!(cache_guard.get("long_lived"), Some(json!({"total": 4})));
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_can_be_aborted() {
        let cache = Arc::new(RwLock::new(ResponseCache::new()));

        let handle = spawn_sweep_task(cache, 1);
        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished());
    }
}
