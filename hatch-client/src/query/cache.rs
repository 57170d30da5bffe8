//! Snapshot cache with staleness tracking
//!
//! Entries are replaced wholesale on every write; there is no merging.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::debug;

use super::key::QueryKey;

struct CacheEntry<T> {
    value: T,
    fetched_at: Instant,
    invalidated: bool,
}

/// A cached snapshot together with its freshness metadata
#[derive(Debug, Clone)]
pub struct CachedValue<T> {
    pub value: T,
    pub fetched_at: Instant,
    pub invalidated: bool,
}

impl<T> CachedValue<T> {
    /// Stale once invalidated or older than `stale_time`
    pub fn is_stale(&self, stale_time: Duration) -> bool {
        self.invalidated || self.fetched_at.elapsed() >= stale_time
    }
}

/// Shared, clonable cache of query snapshots
#[derive(Clone)]
pub struct QueryCache<T> {
    entries: Arc<RwLock<HashMap<QueryKey, CacheEntry<T>>>>,
}

impl<T: Clone> QueryCache<T> {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn get(&self, key: &QueryKey) -> Option<CachedValue<T>> {
        let entries = self.entries.read().await;
        entries.get(key).map(|entry| CachedValue {
            value: entry.value.clone(),
            fetched_at: entry.fetched_at,
            invalidated: entry.invalidated,
        })
    }

    /// Store a fresh snapshot, replacing any previous one
    pub async fn set(&self, key: QueryKey, value: T) {
        let mut entries = self.entries.write().await;
        entries.insert(
            key,
            CacheEntry {
                value,
                fetched_at: Instant::now(),
                invalidated: false,
            },
        );
    }

    /// Mark every entry under `prefix` stale; returns how many were marked
    pub async fn invalidate(&self, prefix: &QueryKey) -> usize {
        let mut entries = self.entries.write().await;
        let mut count = 0;
        for (key, entry) in entries.iter_mut() {
            if key.starts_with(prefix) {
                entry.invalidated = true;
                count += 1;
            }
        }
        debug!(%prefix, count, "invalidated queries");
        count
    }

    pub async fn remove(&self, key: &QueryKey) -> Option<T> {
        let mut entries = self.entries.write().await;
        entries.remove(key).map(|entry| entry.value)
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl<T: Clone> Default for QueryCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
