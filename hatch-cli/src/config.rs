//! Configuration module
//!
//! Handles CLI configuration: which API to talk to and how to authenticate.

use std::sync::Arc;

use hatch_client::PlatformClient;

/// Default platform API endpoint
pub const DEFAULT_API_URL: &str = "https://api.supabase.com";

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the platform API
    pub api_url: String,

    /// Personal access token sent as a bearer token
    pub access_token: Option<String>,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_url.is_empty() {
            anyhow::bail!("api_url cannot be empty");
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            anyhow::bail!("api_url must start with http:// or https://");
        }

        if self.access_token.as_deref().is_some_and(str::is_empty) {
            anyhow::bail!("access_token cannot be empty when set");
        }

        Ok(())
    }

    /// Build a client for the configured API
    pub fn client(&self) -> Arc<PlatformClient> {
        let client = PlatformClient::new(&self.api_url);
        Arc::new(match &self.access_token {
            Some(token) => client.with_access_token(token),
            None => client,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            access_token: None,
        }
    }
}
