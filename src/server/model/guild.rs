//! Guild domain models and parameters.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::{
    model::guild::GuildDto,
    server::{
        error::AppError,
        util::parse::{parse_u64_from_string, stored_timezone_or_utc},
    },
};

/// Discord guild known to the bot, with its display timezone.
#[derive(Debug, Clone, PartialEq)]
pub struct Guild {
    pub guild_id: u64,
    pub name: String,
    pub icon_hash: Option<String>,
    /// Zone the bot renders this guild's events in.
    pub timezone: Tz,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Guild {
    /// Converts an entity model to a guild domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Guild)` - The converted guild
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored guild id is not numeric
    pub fn from_entity(entity: entity::guild::Model) -> Result<Self, AppError> {
        Ok(Self {
            guild_id: parse_u64_from_string(entity.guild_id)?,
            name: entity.name,
            icon_hash: entity.icon_hash,
            timezone: stored_timezone_or_utc(&entity.timezone),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> GuildDto {
        GuildDto {
            guild_id: self.guild_id,
            name: self.name,
            icon_hash: self.icon_hash,
            timezone: self.timezone.name().to_string(),
        }
    }
}

/// Guild data received from Discord. The configured timezone is never part of it.
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertGuildParam {
    pub guild_id: u64,
    pub name: String,
    pub icon_hash: Option<String>,
}

impl UpsertGuildParam {
    pub fn from_discord_guild(guild: &serenity::all::Guild) -> Self {
        Self {
            guild_id: guild.id.get(),
            name: guild.name.clone(),
            icon_hash: guild.icon.as_ref().map(|icon| icon.to_string()),
        }
    }
}
