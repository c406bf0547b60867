use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};

use crate::server::{
    bot::{command::CommandRegistry, handler::Handler},
    config::Config,
    error::AppError,
};

/// Builds the command registry and the Discord client.
///
/// Registration errors surface here so the server refuses to start with a broken
/// command table.
pub async fn init_bot(config: &Config, db: DatabaseConnection) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let registry = Arc::new(CommandRegistry::with_default_commands()?);

    tracing::debug!("Registered bot commands: {}", registry.names().join(", "));

    let handler = Handler::new(db, registry);

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Runs the bot until the gateway connection shuts down.
///
/// Call from a spawned task.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot");

    client.start().await?;

    Ok(())
}
