//! Hatch CLI
//!
//! Command-line interface for inspecting platform projects and waiting for
//! them to finish provisioning.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::{Config, DEFAULT_API_URL};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "hatch")]
#[command(about = "Watch platform projects until they are ready", long_about = None)]
struct Cli {
    /// Platform API URL
    #[arg(long, env = "HATCH_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Personal access token
    #[arg(long, env = "HATCH_ACCESS_TOKEN", hide_env_values = true)]
    access_token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hatch=info,hatch_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        api_url: cli.api_url,
        access_token: cli.access_token,
    };
    config.validate()?;

    handle_command(cli.command, &config).await
}
