//! Auth command handlers

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use hatch_client::query::{MagicLinkMutation, SendMagicLinkVariables};
use hatch_core::domain::user::User;
use tracing::debug;

use crate::config::Config;

/// Auth subcommands
#[derive(Subcommand)]
pub enum AuthCommands {
    /// Send a magic sign-in link to a project user
    MagicLink {
        /// Project reference
        #[arg(long)]
        project: String,

        /// Recipient email address
        #[arg(long)]
        email: String,
    },
}

pub async fn handle_auth_command(command: AuthCommands, config: &Config) -> Result<()> {
    match command {
        AuthCommands::MagicLink { project, email } => {
            send_magic_link(config, project, email).await
        }
    }
}

async fn send_magic_link(config: &Config, project_ref: String, email: String) -> Result<()> {
    // main reports the error; the hook replaces the default warning.
    let mutation = MagicLinkMutation::new(config.client()).on_error(|err, vars| {
        debug!(project_ref = %vars.project_ref, error = %err, "magic link failed");
    });

    mutation
        .mutate(SendMagicLinkVariables {
            project_ref: project_ref.clone(),
            user: User::with_email(email.clone()),
        })
        .await
        .with_context(|| format!("Failed to send magic link for project {}", project_ref))?;

    println!("{} Sent magic link to {}", "✓".green(), email.bold());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_failure_is_returned_with_context() {
        let config = Config {
            api_url: "http://127.0.0.1:9".to_string(),
            access_token: None,
        };

        let err = send_magic_link(&config, "abc".to_string(), "ada@example.com".to_string())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Failed to send magic link for project abc");
        assert!(err.downcast_ref::<hatch_client::ClientError>().is_some());
    }
}
