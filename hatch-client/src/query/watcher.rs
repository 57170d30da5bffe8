//! Readiness watcher
//!
//! Repeatedly fetches a project's detail and asks the query's refetch policy
//! how long to wait before the next fetch. Stops when the policy returns
//! `None`, the deadline passes, or the caller cancels.

use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, info, warn};

use super::project_detail::ProjectDetailQuery;
use super::{QueryError, WatchError};
use crate::cancel::CancelSignal;
use crate::error::ClientError;
use hatch_core::domain::project::Project;

/// Progress reported while watching
#[derive(Debug)]
pub enum WatchEvent<'a> {
    /// A fetch produced a new snapshot
    Snapshot(&'a Project),
    /// A fetch failed; the previous snapshot is kept
    FetchFailed(&'a ClientError),
}

/// Polls a project until its refetch policy says it is ready
pub struct ReadinessWatcher {
    query: ProjectDetailQuery,
    timeout: Option<Duration>,
    cancel: Option<CancelSignal>,
}

impl ReadinessWatcher {
    pub fn new(query: ProjectDetailQuery) -> Self {
        Self {
            query,
            timeout: None,
            cancel: None,
        }
    }

    /// Give up after `timeout` has elapsed
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_cancel(mut self, cancel: CancelSignal) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Watch `project_ref` until ready, returning the final snapshot
    ///
    /// The first fetch honours the cache's staleness window; later fetches
    /// always go to the network.
    pub async fn watch<F>(&self, project_ref: &str, mut on_event: F) -> Result<Project, WatchError>
    where
        F: FnMut(WatchEvent<'_>),
    {
        let deadline = self.timeout.map(|timeout| Instant::now() + timeout);
        // A failed fetch leaves the cached snapshot as the policy input.
        let mut last: Option<Project> = self.query.cached(project_ref).await;
        let mut first = true;

        loop {
            let fetched = if first {
                self.query
                    .fetch(Some(project_ref), self.cancel.clone())
                    .await
            } else {
                self.query.refetch(project_ref, self.cancel.clone()).await
            };
            first = false;

            match fetched {
                Ok(project) => {
                    debug!(%project_ref, status = %project.status, "project snapshot");
                    on_event(WatchEvent::Snapshot(&project));
                    last = Some(project);
                }
                Err(QueryError::Fetch(ClientError::Cancelled)) => return Err(WatchError::Cancelled),
                Err(QueryError::Fetch(e)) => {
                    warn!(%project_ref, error = %e, "project detail fetch failed");
                    on_event(WatchEvent::FetchFailed(&e));
                }
                Err(e) => return Err(e.into()),
            }

            let Some(delay) = self.query.next_refetch(last.as_ref()) else {
                return match last {
                    Some(project) => {
                        info!(%project_ref, status = %project.status, "project is ready");
                        Ok(project)
                    }
                    None => Err(WatchError::NoData),
                };
            };

            let wake_at = Instant::now() + delay;
            let timed_out = deadline.is_some_and(|deadline| wake_at > deadline);
            let wake_at = match deadline {
                Some(deadline) if timed_out => deadline,
                _ => wake_at,
            };

            debug!(%project_ref, ?delay, "scheduling next project fetch");
            self.sleep_until(wake_at).await?;

            if timed_out {
                return Err(WatchError::TimedOut {
                    last: last.map(Box::new),
                });
            }
        }
    }

    async fn sleep_until(&self, wake_at: Instant) -> Result<(), WatchError> {
        match self.cancel.clone() {
            None => {
                tokio::time::sleep_until(wake_at).await;
                Ok(())
            }
            Some(signal) if signal.is_cancelled() => Err(WatchError::Cancelled),
            Some(mut signal) => tokio::select! {
                _ = tokio::time::sleep_until(wake_at) => Ok(()),
                _ = signal.cancelled() => Err(WatchError::Cancelled),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{QueryCache, project_keys};
    use crate::PlatformClient;
    use hatch_core::domain::project::ProjectStatus;
    use std::sync::Arc;

    fn watcher() -> ReadinessWatcher {
        let client = Arc::new(PlatformClient::new("http://127.0.0.1:9"));
        ReadinessWatcher::new(ProjectDetailQuery::new(client, QueryCache::new()))
    }

    #[tokio::test]
    async fn test_ready_cached_snapshot_returns_immediately() {
        let watcher = watcher();
        let ready = Project::new("abc", ProjectStatus::ActiveHealthy)
            .with_connection_string("postgres://db.abc.example.co/postgres");
        watcher
            .query
            .cache()
            .set(project_keys::detail("abc"), ready.clone())
            .await;

        let mut seen = 0;
        let project = watcher
            .watch("abc", |event| {
                if let WatchEvent::Snapshot(_) = event {
                    seen += 1;
                }
            })
            .await
            .unwrap();

        assert_eq!(project, ready);
        assert_eq!(seen, 1);
    }

    #[tokio::test]
    async fn test_timeout_keeps_last_snapshot() {
        let watcher = watcher().with_timeout(Duration::from_millis(50));
        let coming_up = Project::new("abc", ProjectStatus::ComingUp);
        watcher
            .query
            .cache()
            .set(project_keys::detail("abc"), coming_up.clone())
            .await;

        let err = watcher.watch("abc", |_| {}).await.unwrap_err();
        match err {
            WatchError::TimedOut { last } => assert_eq!(last.as_deref(), Some(&coming_up)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_cancel_during_sleep() {
        let (handle, signal) = crate::cancel_pair();
        let watcher = watcher().with_cancel(signal);
        watcher
            .query
            .cache()
            .set(
                project_keys::detail("abc"),
                Project::new("abc", ProjectStatus::ComingUp),
            )
            .await;

        let cancel_task = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            handle.cancel();
        });

        let err = watcher.watch("abc", |_| {}).await.unwrap_err();
        assert!(matches!(err, WatchError::Cancelled));
        cancel_task.await.unwrap();
    }

    #[tokio::test]
    async fn test_failed_refetch_falls_back_to_cached_snapshot() {
        let watcher = watcher().with_timeout(Duration::from_millis(200));
        let ready = Project::new("abc", ProjectStatus::ActiveHealthy)
            .with_connection_string("postgres://db.abc.example.co/postgres");
        watcher
            .query
            .cache()
            .set(project_keys::detail("abc"), ready.clone())
            .await;
        watcher.query.invalidate("abc").await;

        let mut failures = 0;
        let project = watcher
            .watch("abc", |event| {
                if let WatchEvent::FetchFailed(_) = event {
                    failures += 1;
                }
            })
            .await
            .unwrap();

        assert_eq!(project, ready);
        assert_eq!(failures, 1);
    }

    #[tokio::test]
    async fn test_timeout_reports_cached_snapshot_after_failed_fetch() {
        let watcher = watcher().with_timeout(Duration::from_millis(50));
        let coming_up = Project::new("abc", ProjectStatus::ComingUp);
        watcher
            .query
            .cache()
            .set(project_keys::detail("abc"), coming_up.clone())
            .await;
        watcher.query.invalidate("abc").await;

        let err = watcher.watch("abc", |_| {}).await.unwrap_err();
        match err {
            WatchError::TimedOut { last } => assert_eq!(last.as_deref(), Some(&coming_up)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_policy_stopping_without_data() {
        let client = Arc::new(PlatformClient::new("http://127.0.0.1:9"));
        let options = ProjectDetailQuery::default_options().with_refetch_interval(|_| None);
        let query = ProjectDetailQuery::new(client, QueryCache::new()).with_options(options);

        let mut failures = 0;
        let err = ReadinessWatcher::new(query)
            .watch("abc", |event| {
                if let WatchEvent::FetchFailed(_) = event {
                    failures += 1;
                }
            })
            .await
            .unwrap_err();

        assert!(matches!(err, WatchError::NoData));
        assert_eq!(failures, 1);
    }
}
