//! Mutations over write endpoints

use std::sync::Arc;

use tracing::{info, warn};

use crate::error::{ClientError, Result};
use crate::PlatformClient;
use hatch_core::domain::user::User;

/// Variables for [`MagicLinkMutation::mutate`]
#[derive(Debug, Clone)]
pub struct SendMagicLinkVariables {
    pub project_ref: String,
    pub user: User,
}

/// Called after a mutation succeeds
pub type SuccessHook<V> = Arc<dyn Fn(&V) + Send + Sync>;

/// Called after a mutation fails; replaces the default warning
pub type ErrorHook<V> = Arc<dyn Fn(&ClientError, &V) + Send + Sync>;

/// Sends a magic sign-in link to a project user
#[derive(Clone)]
pub struct MagicLinkMutation {
    client: Arc<PlatformClient>,
    on_success: Option<SuccessHook<SendMagicLinkVariables>>,
    on_error: Option<ErrorHook<SendMagicLinkVariables>>,
}

impl MagicLinkMutation {
    pub fn new(client: Arc<PlatformClient>) -> Self {
        Self {
            client,
            on_success: None,
            on_error: None,
        }
    }

    pub fn on_success<F>(mut self, hook: F) -> Self
    where
        F: Fn(&SendMagicLinkVariables) + Send + Sync + 'static,
    {
        self.on_success = Some(Arc::new(hook));
        self
    }

    pub fn on_error<F>(mut self, hook: F) -> Self
    where
        F: Fn(&ClientError, &SendMagicLinkVariables) + Send + Sync + 'static,
    {
        self.on_error = Some(Arc::new(hook));
        self
    }

    /// Send the link, then run the matching hook
    ///
    /// Without an error hook, failures are logged as
    /// `Failed to send magic link: <message>`. The error is returned either way.
    pub async fn mutate(&self, vars: SendMagicLinkVariables) -> Result<()> {
        match self.client.send_magic_link(&vars.project_ref, &vars.user).await {
            Ok(()) => {
                info!(project_ref = %vars.project_ref, user_id = %vars.user.id, "magic link sent");
                if let Some(hook) = &self.on_success {
                    hook(&vars);
                }
                Ok(())
            }
            Err(e) => {
                match &self.on_error {
                    Some(hook) => hook(&e, &vars),
                    None => warn!("Failed to send magic link: {}", e.message()),
                }
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_error_hook_replaces_default() {
        let client = Arc::new(PlatformClient::new("http://127.0.0.1:9"));
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);

        let mutation = MagicLinkMutation::new(client).on_error(move |err, vars| {
            assert!(matches!(err, ClientError::InvalidRequest(_)));
            assert_eq!(vars.project_ref, "abc");
            seen.fetch_add(1, Ordering::SeqCst);
        });

        let mut user = User::with_email("ada@example.com");
        user.email = None;
        let result = mutation
            .mutate(SendMagicLinkVariables {
                project_ref: "abc".to_string(),
                user,
            })
            .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
