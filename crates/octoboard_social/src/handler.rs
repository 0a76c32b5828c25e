//! Serenity event handler: slash-command registration and dispatch.

use crate::commands;
use octoboard_github::{ContributorDirectory, GithubClient};
use serenity::all::{
    Command, CommandInteraction, CommandOptionType, CreateAutocompleteResponse, CreateCommand,
    CreateCommandOption, CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, GatewayIntents, Interaction, Ready, ResolvedValue,
};
use serenity::async_trait;
use serenity::client::{Context, EventHandler};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

/// Event handler for the octoboard Discord bot.
///
/// Dispatches slash commands against the shared contributor directory. The
/// directory sits behind one async mutex, so command handling is serialized:
/// the cache only ever sees one reader/writer at a time.
pub struct OctoboardHandler {
    directory: Arc<Mutex<ContributorDirectory<GithubClient>>>,
}

impl OctoboardHandler {
    /// Create a handler over the shared contributor directory.
    pub fn new(directory: Arc<Mutex<ContributorDirectory<GithubClient>>>) -> Self {
        Self { directory }
    }

    /// Required gateway intents for the bot.
    ///
    /// Slash commands arrive as interactions, which need no gateway intents.
    pub fn intents() -> GatewayIntents {
        GatewayIntents::empty()
    }

    /// The bot's global slash-command set.
    fn command_set() -> Vec<CreateCommand> {
        vec![
            CreateCommand::new("ping").description("Ping pong"),
            CreateCommand::new("leaderboard")
                .description("Show the contributor leaderboard")
                .add_option(
                    CreateCommandOption::new(
                        CommandOptionType::Integer,
                        "page",
                        "The page to show.",
                    )
                    .min_int_value(1)
                    .required(false),
                ),
            CreateCommand::new("hero")
                .description("Show the details of a hero who has contributed")
                .add_option(
                    CreateCommandOption::new(
                        CommandOptionType::String,
                        "hero",
                        "GitHub login of the contributor",
                    )
                    .required(true)
                    .set_autocomplete(true),
                ),
        ]
    }

    async fn handle_ping(&self, ctx: &Context, cmd: &CommandInteraction) {
        let response = CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new().content("Pong!"),
        );
        if let Err(e) = cmd.create_response(&ctx.http, response).await {
            error!(error = %e, "Failed to respond to ping");
        }
    }

    async fn handle_leaderboard(&self, ctx: &Context, cmd: &CommandInteraction) {
        if let Err(e) = cmd.defer(&ctx.http).await {
            error!(error = %e, "Failed to defer leaderboard response");
            return;
        }

        let page = cmd
            .data
            .options()
            .iter()
            .find(|option| option.name == "page")
            .and_then(|option| match &option.value {
                ResolvedValue::Integer(page) => Some(*page),
                _ => None,
            })
            .unwrap_or(1);

        let (result, organization) = {
            let mut directory = self.directory.lock().await;
            let result = directory.leaderboard().await;
            (result, directory.organization().clone())
        };

        let followup = match result {
            Ok(entries) => CreateInteractionResponseFollowup::new().embed(
                commands::leaderboard_embed(&entries, &organization, page),
            ),
            Err(err) => {
                error!(error = %err, "Leaderboard build failed");
                CreateInteractionResponseFollowup::new()
                    .content(commands::github_error_message(&err))
            }
        };

        if let Err(e) = cmd.create_followup(&ctx.http, followup).await {
            error!(error = %e, "Failed to send leaderboard followup");
        }
    }

    async fn handle_hero(&self, ctx: &Context, cmd: &CommandInteraction) {
        if let Err(e) = cmd.defer(&ctx.http).await {
            error!(error = %e, "Failed to defer hero response");
            return;
        }

        let login = cmd
            .data
            .options()
            .iter()
            .find(|option| option.name == "hero")
            .and_then(|option| match &option.value {
                ResolvedValue::String(login) => Some(login.to_string()),
                _ => None,
            });

        let followup = match login {
            Some(login) => {
                let result = self.directory.lock().await.profile(&login).await;
                match result {
                    Ok(profile) => CreateInteractionResponseFollowup::new()
                        .embed(commands::hero_embed(&profile)),
                    Err(err) => {
                        error!(error = %err, login, "Profile fetch failed");
                        CreateInteractionResponseFollowup::new()
                            .content(commands::github_error_message(&err))
                    }
                }
            }
            None => CreateInteractionResponseFollowup::new()
                .content("Tell me which hero you want to look up!"),
        };

        if let Err(e) = cmd.create_followup(&ctx.http, followup).await {
            error!(error = %e, "Failed to send hero followup");
        }
    }

    /// Offer roster logins matching the typed prefix, capped at 25 choices.
    async fn handle_hero_autocomplete(&self, ctx: &Context, cmd: &CommandInteraction) {
        let current = cmd
            .data
            .autocomplete()
            .map(|option| option.value.to_lowercase())
            .unwrap_or_default();

        let mut response = CreateAutocompleteResponse::new();
        match self.directory.lock().await.contributors().await {
            Ok(roster) => {
                for login in roster
                    .iter()
                    .filter(|login| login.to_lowercase().contains(&current))
                    .take(25)
                {
                    response = response.add_string_choice(login.as_str(), login.as_str());
                }
            }
            Err(err) => {
                // Autocomplete has no error surface; an empty choice list is
                // the only thing we can send.
                warn!(error = %err, "Roster fetch for autocomplete failed");
            }
        }

        if let Err(e) = cmd
            .create_response(&ctx.http, CreateInteractionResponse::Autocomplete(response))
            .await
        {
            error!(error = %e, "Failed to send autocomplete response");
        }
    }
}

#[async_trait]
impl EventHandler for OctoboardHandler {
    /// Called when the bot successfully connects to Discord.
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(
            bot_user = %ready.user.name,
            bot_id = %ready.user.id,
            guilds = ready.guilds.len(),
            "Bot connected to Discord"
        );

        match Command::set_global_commands(&ctx.http, Self::command_set()).await {
            Ok(registered) => {
                info!(count = registered.len(), "Registered global slash commands");
            }
            Err(e) => {
                error!(error = %e, "Failed to register global slash commands");
            }
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::Command(cmd) => {
                debug!(command = %cmd.data.name, user = %cmd.user.name, "Command received");
                match cmd.data.name.as_str() {
                    "ping" => self.handle_ping(&ctx, &cmd).await,
                    "leaderboard" => self.handle_leaderboard(&ctx, &cmd).await,
                    "hero" => self.handle_hero(&ctx, &cmd).await,
                    other => warn!(command = other, "Unknown command"),
                }
            }
            Interaction::Autocomplete(cmd) => {
                if cmd.data.name == "hero" {
                    self.handle_hero_autocomplete(&ctx, &cmd).await;
                }
            }
            _ => {}
        }
    }
}
