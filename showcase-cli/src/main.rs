use anyhow::{Context, Result};
use clap::Parser;
use showcase_client::Actions;
use showcase_config::ConfigLoader;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.log_level.as_deref());

    let config = ConfigLoader::new()
        .load(cli.config.as_ref())
        .context("failed to load configuration")?;
    debug!(endpoint = %config.api.graphql_url, "configuration loaded");

    let actions = Actions::new(&config).context("failed to construct API client")?;

    match cli.command {
        Commands::Project { project_cmd } => {
            commands::project::run(&actions, project_cmd, cli.format).await
        }
        Commands::User { user_cmd } => commands::user::run(&actions, user_cmd, cli.format).await,
        Commands::Token => commands::token(&actions, cli.format).await,
    }
}

fn init_tracing(log_level: Option<&str>) {
    let filter = match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
