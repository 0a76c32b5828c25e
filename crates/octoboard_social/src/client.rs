//! Discord bot client setup and lifecycle management.

use crate::handler::OctoboardHandler;
use octoboard_error::{DiscordError, DiscordErrorKind, DiscordResult};
use octoboard_github::{ContributorDirectory, GithubClient};
use serenity::Client;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, instrument};

/// Main Discord bot client for octoboard.
///
/// Wraps the Serenity client and wires the event handler to the shared
/// contributor directory.
///
/// # Example
/// ```no_run
/// use octoboard_github::{ContributorDirectory, GithubClient};
/// use octoboard_social::OctoboardBot;
/// use std::sync::Arc;
/// use tokio::sync::Mutex;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let token = std::env::var("DISCORD_TOKEN")?;
///     let github = GithubClient::new(std::env::var("ACCESS_TOKEN")?);
///     let directory = ContributorDirectory::new(github, "my-org");
///
///     let mut bot = OctoboardBot::new(token, Arc::new(Mutex::new(directory))).await?;
///     bot.start().await?;
///     Ok(())
/// }
/// ```
pub struct OctoboardBot {
    client: Client,
}

impl OctoboardBot {
    /// Create a new OctoboardBot instance.
    ///
    /// # Arguments
    /// * `token` - Discord bot token from the Discord Developer Portal
    /// * `directory` - Shared contributor directory backing the commands
    ///
    /// # Errors
    /// Returns an error if the bot token is invalid or the Serenity client
    /// fails to initialize.
    #[instrument(skip(token, directory), fields(token_len = token.len()))]
    pub async fn new(
        token: String,
        directory: Arc<Mutex<ContributorDirectory<GithubClient>>>,
    ) -> DiscordResult<Self> {
        info!("Initializing octoboard Discord bot");

        let handler = OctoboardHandler::new(directory);
        let intents = OctoboardHandler::intents();

        let client = Client::builder(&token, intents)
            .event_handler(handler)
            .await
            .map_err(|e| {
                DiscordError::new(DiscordErrorKind::ConnectionFailed(format!(
                    "Failed to build client: {}",
                    e
                )))
            })?;

        info!("Serenity client built successfully");

        Ok(Self { client })
    }

    /// Start the Discord bot.
    ///
    /// This method blocks until the bot is shut down (e.g., via Ctrl+C).
    ///
    /// # Errors
    /// Returns an error if the client fails to start or encounters a fatal
    /// error.
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> DiscordResult<()> {
        info!("Starting Discord bot");

        self.client.start().await.map_err(|e| {
            DiscordError::new(DiscordErrorKind::ConnectionFailed(format!(
                "Client error: {}",
                e
            )))
        })?;

        Ok(())
    }
}
