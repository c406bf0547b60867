//! Message handler dispatching `!` commands.

use sea_orm::DatabaseConnection;
use serenity::all::{Context, Message};

use crate::server::bot::command::{
    error_reply, parse_command_line, split_message, CommandInvocation, CommandRegistry,
};

pub static UNKNOWN_COMMAND_REPLY: &str = "Unknown command.";

/// Answers a command message in the channel it was posted in.
///
/// Messages from bots and messages that do not start with the command prefix are
/// ignored.
pub async fn handle_message(
    db: &DatabaseConnection,
    registry: &CommandRegistry,
    ctx: Context,
    message: Message,
) {
    if message.author.bot {
        return;
    }

    let Some((name, args)) = parse_command_line(&message.content) else {
        return;
    };

    let reply = match registry.get(&name) {
        Some(command) => {
            tracing::debug!(
                "Running command '{}' for {} in guild {:?}",
                name,
                message.author.id,
                message.guild_id
            );

            let invocation = CommandInvocation {
                guild_id: message.guild_id.map(|id| id.get()),
                args,
            };

            match command.execute(db, &invocation).await {
                Ok(reply) => reply,
                Err(e) => error_reply(&name, e),
            }
        }
        None => UNKNOWN_COMMAND_REPLY.to_string(),
    };

    for chunk in split_message(&reply) {
        if let Err(e) = message.channel_id.say(&ctx.http, chunk).await {
            tracing::error!(
                "Failed to reply to command '{}' in channel {}: {:?}",
                name,
                message.channel_id,
                e
            );
            return;
        }
    }
}
