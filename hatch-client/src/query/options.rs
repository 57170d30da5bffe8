//! Per-query options

use std::sync::Arc;
use std::time::Duration;

/// Policy deciding the delay before the next fetch, given the latest snapshot
///
/// `None` stops polling.
pub type RefetchInterval<T> = Arc<dyn Fn(Option<&T>) -> Option<Duration> + Send + Sync>;

/// Options applied to a query
#[derive(Clone)]
pub struct QueryOptions<T> {
    /// Disabled queries never fetch
    pub enabled: bool,

    /// How long a cached snapshot counts as fresh
    pub stale_time: Duration,

    /// Polling policy; `None` disables polling
    pub refetch_interval: Option<RefetchInterval<T>>,
}

impl<T> QueryOptions<T> {
    pub fn new(stale_time: Duration) -> Self {
        Self {
            enabled: true,
            stale_time,
            refetch_interval: None,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_refetch_interval<F>(mut self, policy: F) -> Self
    where
        F: Fn(Option<&T>) -> Option<Duration> + Send + Sync + 'static,
    {
        self.refetch_interval = Some(Arc::new(policy));
        self
    }

    /// Evaluate the polling policy for a snapshot
    pub fn next_refetch(&self, snapshot: Option<&T>) -> Option<Duration> {
        self.refetch_interval
            .as_ref()
            .and_then(|policy| policy(snapshot))
    }
}

impl<T> std::fmt::Debug for QueryOptions<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryOptions")
            .field("enabled", &self.enabled)
            .field("stale_time", &self.stale_time)
            .field("refetch_interval", &self.refetch_interval.is_some())
            .finish()
    }
}
