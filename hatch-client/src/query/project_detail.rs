//! Project detail query
//!
//! Cache-aware wrapper around [`PlatformClient::get_project_detail`]. By
//! default snapshots stay fresh for 30 seconds and the readiness policy from
//! `hatch_core::readiness` drives polling.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use super::cache::QueryCache;
use super::key::project_keys;
use super::options::QueryOptions;
use super::QueryError;
use crate::cancel::CancelSignal;
use crate::PlatformClient;
use hatch_core::domain::project::Project;
use hatch_core::readiness::default_refetch_interval;

/// How long a fetched project detail counts as fresh
pub const PROJECT_DETAIL_STALE_TIME: Duration = Duration::from_secs(30);

/// Query over a single project's detail record
#[derive(Clone)]
pub struct ProjectDetailQuery {
    client: Arc<PlatformClient>,
    cache: QueryCache<Project>,
    options: QueryOptions<Project>,
}

impl ProjectDetailQuery {
    /// Create a query with the default staleness window and readiness policy
    pub fn new(client: Arc<PlatformClient>, cache: QueryCache<Project>) -> Self {
        Self {
            client,
            cache,
            options: Self::default_options(),
        }
    }

    pub fn default_options() -> QueryOptions<Project> {
        QueryOptions::new(PROJECT_DETAIL_STALE_TIME).with_refetch_interval(default_refetch_interval)
    }

    /// Replace the query options
    pub fn with_options(mut self, options: QueryOptions<Project>) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &QueryOptions<Project> {
        &self.options
    }

    pub fn cache(&self) -> &QueryCache<Project> {
        &self.cache
    }

    /// Return the cached snapshot if fresh, otherwise fetch a new one
    pub async fn fetch(
        &self,
        project_ref: Option<&str>,
        cancel: Option<CancelSignal>,
    ) -> Result<Project, QueryError> {
        let project_ref = self.require_enabled(project_ref)?;

        if let Some(cached) = self.cache.get(&project_keys::detail(project_ref)).await {
            if !cached.is_stale(self.options.stale_time) {
                debug!(%project_ref, "project detail served from cache");
                return Ok(cached.value);
            }
        }

        self.refetch(project_ref, cancel).await
    }

    /// Fetch unconditionally and store the result
    ///
    /// A failed fetch leaves the previous snapshot in the cache untouched.
    pub async fn refetch(
        &self,
        project_ref: &str,
        cancel: Option<CancelSignal>,
    ) -> Result<Project, QueryError> {
        let project = self
            .client
            .get_project_detail(Some(project_ref), cancel)
            .await?;
        self.cache
            .set(project_keys::detail(project_ref), project.clone())
            .await;
        Ok(project)
    }

    /// Warm the cache for a project, ignoring the enabled flag
    pub async fn prefetch(&self, project_ref: &str) -> Result<Project, QueryError> {
        self.refetch(project_ref, None).await
    }

    /// Mark a project's cached detail stale
    pub async fn invalidate(&self, project_ref: &str) {
        self.cache.invalidate(&project_keys::detail(project_ref)).await;
    }

    /// Last stored snapshot, fresh or not
    pub async fn cached(&self, project_ref: &str) -> Option<Project> {
        self.cache
            .get(&project_keys::detail(project_ref))
            .await
            .map(|cached| cached.value)
    }

    /// Delay before the next fetch for this snapshot, per the options' policy
    pub fn next_refetch(&self, snapshot: Option<&Project>) -> Option<Duration> {
        self.options.next_refetch(snapshot)
    }

    fn require_enabled<'a>(&self, project_ref: Option<&'a str>) -> Result<&'a str, QueryError> {
        if !self.options.enabled {
            return Err(QueryError::Disabled("project detail query is disabled".to_string()));
        }
        project_ref
            .filter(|r| !r.is_empty())
            .ok_or_else(|| QueryError::Disabled("project ref is not set".to_string()))
    }
}
