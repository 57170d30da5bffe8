//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod auth;
mod project;

pub use auth::AuthCommands;
pub use project::ProjectCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Project inspection and readiness
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },
    /// Project auth operations
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },
}

/// Route a command to its handler module
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Project { command } => project::handle_project_command(command, config).await,
        Commands::Auth { command } => auth::handle_auth_command(command, config).await,
    }
}
