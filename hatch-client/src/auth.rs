//! Auth-related API endpoints

use crate::error::{ClientError, Result};
use crate::PlatformClient;
use hatch_core::domain::user::User;
use hatch_core::dto::auth::SendMagicLink;

impl PlatformClient {
    // =============================================================================
    // Magic Links
    // =============================================================================

    /// Send a magic sign-in link to a project user
    ///
    /// # Arguments
    /// * `project_ref` - The project the user belongs to
    /// * `user` - The recipient; must have an email address
    pub async fn send_magic_link(&self, project_ref: &str, user: &User) -> Result<()> {
        if project_ref.is_empty() {
            return Err(ClientError::InvalidRequest(
                "Project ref is required".to_string(),
            ));
        }
        let email = user.email.clone().ok_or_else(|| {
            ClientError::InvalidRequest(format!("User {} has no email address", user.id))
        })?;

        let url = format!("{}/platform/auth/{}/magiclink", self.base_url, project_ref);
        let response = self
            .authorize(self.client.post(&url))
            .json(&SendMagicLink { email })
            .send()
            .await?;

        self.handle_empty_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_user_without_email_is_rejected() {
        let client = PlatformClient::new("http://127.0.0.1:9");
        let mut user = User::with_email("ada@example.com");
        user.email = None;

        let err = client.send_magic_link("abc", &user).await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_empty_ref_is_rejected() {
        let client = PlatformClient::new("http://127.0.0.1:9");
        let user = User::with_email("ada@example.com");

        let err = client.send_magic_link("", &user).await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidRequest(_)));
    }
}
