//! Guild event handler.
//!
//! `guild_create` fires on startup for every guild the bot is in, when it joins a new
//! guild and when a guild becomes available again after an outage. Each time the
//! guild's name and icon are written to the database. The timezone configured with
//! `!set_timezone` is left untouched.

use sea_orm::DatabaseConnection;
use serenity::all::{Context, Guild};

use crate::server::{model::guild::UpsertGuildParam, service::guild::GuildService};

pub async fn handle_guild_create(
    db: &DatabaseConnection,
    _ctx: Context,
    guild: Guild,
    is_new: Option<bool>,
) {
    let param = UpsertGuildParam::from_discord_guild(&guild);

    tracing::debug!(
        "Guild create event: {} ({}) - new: {:?}",
        param.name,
        param.guild_id,
        is_new
    );

    let guild_id = param.guild_id;

    if let Err(e) = GuildService::new(db).sync(param).await {
        tracing::error!("Failed to upsert guild {}: {:?}", guild_id, e);
    }
}
