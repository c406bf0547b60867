//! Ready event handler.
//!
//! Fired once per gateway connection after the initial handshake.

use serenity::all::{ActivityData, Context, Ready};

/// Logs the connection and advertises the help command as the bot's activity.
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );

    ctx.set_activity(Some(ActivityData::custom("!help")));
}
