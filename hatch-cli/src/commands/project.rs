//! Project command handlers
//!
//! Shows project details and waits for freshly provisioned projects to come
//! online.

use std::time::Duration;

use anyhow::{Result, bail};
use clap::Subcommand;
use colored::*;
use hatch_client::query::{ProjectDetailQuery, QueryCache, ReadinessWatcher, WatchError, WatchEvent};
use hatch_client::{PlatformClient, cancel_pair};
use hatch_core::domain::project::{Project, ProjectStatus};
use hatch_core::readiness::is_valid_conn_string;
use tracing::debug;

use crate::config::Config;

/// Project subcommands
#[derive(Subcommand)]
pub enum ProjectCommands {
    /// Show project details
    Get {
        /// Project reference
        project_ref: String,
    },
    /// Poll a project until it is ready to accept connections
    Wait {
        /// Project reference
        project_ref: String,

        /// Give up after this many seconds
        #[arg(long, default_value_t = 600)]
        timeout: u64,
    },
}

pub async fn handle_project_command(command: ProjectCommands, config: &Config) -> Result<()> {
    let client = config.client();

    match command {
        ProjectCommands::Get { project_ref } => get_project(&client, &project_ref).await,
        ProjectCommands::Wait {
            project_ref,
            timeout,
        } => {
            let query = ProjectDetailQuery::new(client, QueryCache::new());
            wait_for_project(query, &project_ref, Duration::from_secs(timeout)).await
        }
    }
}

async fn get_project(client: &PlatformClient, project_ref: &str) -> Result<()> {
    let project = client.get_project_detail(Some(project_ref), None).await?;
    print_project_details(&project);
    Ok(())
}

async fn wait_for_project(
    query: ProjectDetailQuery,
    project_ref: &str,
    timeout: Duration,
) -> Result<()> {
    let (handle, signal) = cancel_pair();
    let ctrl_c = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            handle.cancel();
        }
    });

    println!(
        "{}",
        format!("Waiting for project {} to become ready...", project_ref).bold()
    );

    let watcher = ReadinessWatcher::new(query)
        .with_timeout(timeout)
        .with_cancel(signal);

    let mut last_status: Option<ProjectStatus> = None;
    let result = watcher
        .watch(project_ref, |event| match event {
            WatchEvent::Snapshot(project) => {
                if last_status != Some(project.status) {
                    println!("  {} {}", "▸".cyan(), colorize_status(&project.status));
                    last_status = Some(project.status);
                } else {
                    debug!(status = %project.status, "status unchanged");
                }
            }
            WatchEvent::FetchFailed(err) => {
                eprintln!("  {} {}", "!".yellow(), err.message().dimmed());
            }
        })
        .await;

    ctrl_c.abort();

    match result {
        Ok(project) => {
            println!();
            println!("{} Project {} is ready", "✓".green(), project_ref.bold());
            print_project_details(&project);
            Ok(())
        }
        Err(WatchError::TimedOut { last }) => {
            let status = last
                .map(|p| p.status.to_string())
                .unwrap_or_else(|| "no data".to_string());
            bail!(
                "project {} not ready after {}s (last status: {})",
                project_ref,
                timeout.as_secs(),
                status
            )
        }
        Err(WatchError::Cancelled) => {
            println!("{}", "Cancelled.".yellow());
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn print_project_details(project: &Project) {
    println!();
    println!(
        "  {} Project {}",
        "▸".cyan(),
        project.project_ref.bold()
    );
    if let Some(name) = &project.name {
        println!("    Name:        {}", name);
    }
    println!("    Status:      {}", colorize_status(&project.status));
    if let Some(region) = &project.region {
        println!("    Region:      {}", region.dimmed());
    }
    if let Some(inserted_at) = project.inserted_at {
        println!(
            "    Created:     {}",
            inserted_at.format("%Y-%m-%d %H:%M:%S").to_string().dimmed()
        );
    }
    let connection = if is_valid_conn_string(project.connection_string.as_deref()) {
        "available".green()
    } else {
        "pending".yellow()
    };
    println!("    Connection:  {}", connection);
    println!();
}

fn colorize_status(status: &ProjectStatus) -> ColoredString {
    let status_str = status.to_string();
    match status {
        ProjectStatus::ActiveHealthy => status_str.green(),
        ProjectStatus::ComingUp
        | ProjectStatus::Restoring
        | ProjectStatus::Restarting
        | ProjectStatus::Resizing
        | ProjectStatus::Upgrading
        | ProjectStatus::Pausing
        | ProjectStatus::GoingDown => status_str.yellow(),
        ProjectStatus::ActiveUnhealthy
        | ProjectStatus::InitFailed
        | ProjectStatus::PauseFailed
        | ProjectStatus::RestoreFailed => status_str.red(),
        ProjectStatus::Unknown
        | ProjectStatus::Inactive
        | ProjectStatus::Removed
        | ProjectStatus::Unrecognized => status_str.dimmed(),
    }
}
