//! Query layer
//!
//! Caches API snapshots under hierarchical keys, decides when they are stale,
//! and drives refetch polling through a pluggable interval policy. Mutations
//! wrap write endpoints with success and error hooks.

mod cache;
mod key;
mod mutation;
mod options;
mod project_detail;
mod watcher;

pub use cache::{CachedValue, QueryCache};
pub use key::{QueryKey, project_keys};
pub use mutation::{ErrorHook, MagicLinkMutation, SendMagicLinkVariables, SuccessHook};
pub use options::{QueryOptions, RefetchInterval};
pub use project_detail::ProjectDetailQuery;
pub use watcher::{ReadinessWatcher, WatchEvent};

use thiserror::Error;

use crate::error::ClientError;

/// Errors surfaced by queries
#[derive(Debug, Error)]
pub enum QueryError {
    /// The query is disabled or missing a required variable
    #[error("Query disabled: {0}")]
    Disabled(String),

    /// The underlying fetch failed
    #[error(transparent)]
    Fetch(#[from] ClientError),
}

/// Errors that end a readiness watch
#[derive(Debug, Error)]
pub enum WatchError {
    #[error(transparent)]
    Query(#[from] QueryError),

    /// The caller cancelled the watch
    #[error("Watch cancelled")]
    Cancelled,

    /// The deadline passed before the project became ready
    #[error("Timed out waiting for project to become ready")]
    TimedOut {
        /// Most recent snapshot, if any fetch succeeded
        last: Option<Box<hatch_core::domain::project::Project>>,
    },

    /// The refetch policy stopped polling before any snapshot arrived
    #[error("Polling stopped without any project data")]
    NoData,
}
