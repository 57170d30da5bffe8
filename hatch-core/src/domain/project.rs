//! Project domain model
//!
//! A project is a provisioned Postgres instance on the platform. Each fetch of
//! the project detail endpoint yields a fresh [`Project`] snapshot; snapshots
//! are never patched in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Snapshot of a project as returned by `GET /platform/projects/{ref}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Numeric project id
    #[serde(default)]
    pub id: Option<i64>,

    /// Short project reference used in URLs
    #[serde(default, rename = "ref")]
    pub project_ref: String,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,

    /// Owning organization
    #[serde(default)]
    pub organization_id: Option<i64>,

    /// Cloud provider hosting the instance (e.g. "AWS")
    #[serde(default)]
    pub cloud_provider: Option<String>,

    /// Region the instance runs in
    #[serde(default)]
    pub region: Option<String>,

    /// When the project was created
    #[serde(default)]
    pub inserted_at: Option<DateTime<Utc>>,

    /// Lifecycle status; a missing or null status reads as `UNKNOWN`
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ProjectStatus,

    /// Database connection string, present once provisioning has finished
    #[serde(default, rename = "connectionString")]
    pub connection_string: Option<String>,

    /// Database host name
    #[serde(default)]
    pub db_host: Option<String>,

    /// REST gateway status, tracked client side only
    #[serde(default, rename = "postgrestStatus", skip_serializing_if = "Option::is_none")]
    pub postgrest_status: Option<PostgrestStatus>,
}

impl Project {
    /// Create a minimal snapshot with only a ref and status set
    pub fn new(project_ref: impl Into<String>, status: ProjectStatus) -> Self {
        Self {
            id: None,
            project_ref: project_ref.into(),
            name: None,
            organization_id: None,
            cloud_provider: None,
            region: None,
            inserted_at: None,
            status,
            connection_string: None,
            db_host: None,
            postgrest_status: None,
        }
    }

    /// Set the connection string
    pub fn with_connection_string(mut self, connection_string: impl Into<String>) -> Self {
        self.connection_string = Some(connection_string.into());
        self
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Lifecycle status of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    /// Instance is being provisioned
    ComingUp,

    /// Platform could not determine the state
    #[default]
    Unknown,

    /// Running and passing health checks
    ActiveHealthy,

    /// Running but failing health checks
    ActiveUnhealthy,

    /// Shutting down
    GoingDown,

    /// Paused
    Inactive,

    /// Provisioning failed
    InitFailed,

    /// Deleted
    Removed,

    /// Restoring from a backup
    Restoring,

    /// Restarting
    Restarting,

    /// Pausing
    Pausing,

    /// Pause did not complete
    PauseFailed,

    /// Restore did not complete
    RestoreFailed,

    /// Compute is being resized
    Resizing,

    /// Postgres is being upgraded
    Upgrading,

    /// A status this client does not know about
    #[serde(other)]
    Unrecognized,
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ProjectStatus::ComingUp => "COMING_UP",
            ProjectStatus::Unknown => "UNKNOWN",
            ProjectStatus::ActiveHealthy => "ACTIVE_HEALTHY",
            ProjectStatus::ActiveUnhealthy => "ACTIVE_UNHEALTHY",
            ProjectStatus::GoingDown => "GOING_DOWN",
            ProjectStatus::Inactive => "INACTIVE",
            ProjectStatus::InitFailed => "INIT_FAILED",
            ProjectStatus::Removed => "REMOVED",
            ProjectStatus::Restoring => "RESTORING",
            ProjectStatus::Restarting => "RESTARTING",
            ProjectStatus::Pausing => "PAUSING",
            ProjectStatus::PauseFailed => "PAUSE_FAILED",
            ProjectStatus::RestoreFailed => "RESTORE_FAILED",
            ProjectStatus::Resizing => "RESIZING",
            ProjectStatus::Upgrading => "UPGRADING",
            ProjectStatus::Unrecognized => "UNRECOGNIZED",
        };
        write!(f, "{}", s)
    }
}

/// Status of the REST gateway in front of a project's database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PostgrestStatus {
    Online,
    Offline,
}
