//! Hatch HTTP Client
//!
//! A type-safe HTTP client for the platform management API, plus a small query
//! layer that caches project snapshots and polls them until they are ready.
//!
//! # Example
//!
//! ```no_run
//! use hatch_client::PlatformClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = PlatformClient::new("https://api.supabase.com")
//!         .with_access_token("sbp_...");
//!
//!     let project = client.get_project_detail(Some("abcdefghij"), None).await?;
//!     println!("{} is {}", project.project_ref, project.status);
//!     Ok(())
//! }
//! ```

mod auth;
pub mod cancel;
pub mod error;
mod projects;
pub mod query;

// Re-export commonly used types
pub use cancel::{CancelHandle, CancelSignal, cancel_pair};
pub use error::{ClientError, Result};
pub use hatch_core::domain::project::{Project, ProjectStatus};

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

/// HTTP client for the platform API
///
/// Endpoints are grouped by area:
/// - Projects: detail lookup used for readiness polling
/// - Auth: magic link delivery for project users
#[derive(Debug, Clone)]
pub struct PlatformClient {
    /// Base URL of the API (e.g., "https://api.supabase.com")
    base_url: String,
    /// Bearer token sent with every request, if set
    access_token: Option<String>,
    /// HTTP client instance
    client: Client,
}

impl PlatformClient {
    /// Create a new platform client
    ///
    /// # Example
    /// ```
    /// use hatch_client::PlatformClient;
    ///
    /// let client = PlatformClient::new("http://localhost:8080");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new platform client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: None,
            client,
        }
    }

    /// Attach a bearer token to every request
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Get the base URL of the API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Non-2xx responses become [`ClientError::ApiError`] carrying the
    /// platform's error message.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::from_body(status.as_u16(), &body));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response whose body is not needed
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::from_body(status.as_u16(), &body));
        }

        Ok(())
    }
}
