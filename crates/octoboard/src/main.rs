use anyhow::Result;
use octoboard_github::{ContributorDirectory, GithubClient, GithubConfig};
use octoboard_social::OctoboardBot;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Credentials come from the environment, optionally via .env.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = GithubConfig::from_env()?;
    let token = std::env::var("DISCORD_TOKEN")
        .map_err(|_| anyhow::anyhow!("DISCORD_TOKEN is not set"))?;

    info!(organization = %config.organization(), "Starting octoboard");

    let github = GithubClient::new(config.access_token().as_str());
    let directory = ContributorDirectory::new(github, config.organization().as_str());
    let mut bot = OctoboardBot::new(token, Arc::new(Mutex::new(directory))).await?;

    bot.start().await?;
    Ok(())
}
