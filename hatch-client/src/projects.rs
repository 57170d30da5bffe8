//! Project-related API endpoints

use tracing::debug;

use crate::cancel::CancelSignal;
use crate::error::{ClientError, Result};
use crate::PlatformClient;
use hatch_core::domain::project::Project;

impl PlatformClient {
    // =============================================================================
    // Project Detail
    // =============================================================================

    /// Fetch the detail record of a project
    ///
    /// # Arguments
    /// * `project_ref` - The project reference; `None` or empty is rejected
    ///   before any request is made
    /// * `cancel` - Optional signal that aborts the request
    ///
    /// # Example
    /// ```no_run
    /// # use hatch_client::{PlatformClient, cancel_pair};
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = PlatformClient::new("http://localhost:8080");
    /// let (_handle, signal) = cancel_pair();
    /// let project = client.get_project_detail(Some("abcdefghij"), Some(signal)).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_project_detail(
        &self,
        project_ref: Option<&str>,
        cancel: Option<CancelSignal>,
    ) -> Result<Project> {
        let project_ref = project_ref
            .filter(|r| !r.is_empty())
            .ok_or_else(|| ClientError::InvalidRequest("Project ref is required".to_string()))?;

        let url = format!("{}/platform/projects/{}", self.base_url, project_ref);
        debug!(%project_ref, "fetching project detail");

        let fetch = async {
            let response = self.authorize(self.client.get(&url)).send().await?;
            self.handle_response::<Project>(response).await
        };

        match cancel {
            None => fetch.await,
            Some(signal) if signal.is_cancelled() => Err(ClientError::Cancelled),
            Some(mut signal) => tokio::select! {
                result = fetch => result,
                _ = signal.cancelled() => Err(ClientError::Cancelled),
            },
        }
    }
}
