//! Guild service for business logic.

use chrono_tz::Tz;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::guild::GuildRepository,
    error::AppError,
    model::guild::{Guild, UpsertGuildParam},
    util::parse::parse_timezone,
};

pub struct GuildService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Guild>, AppError> {
        GuildRepository::new(self.db).get_all().await
    }

    /// Gets a guild by id.
    ///
    /// # Returns
    /// - `Ok(Guild)` - Guild found
    /// - `Err(AppError::NotFound)` - Unknown guild
    pub async fn get_by_id(&self, guild_id: u64) -> Result<Guild, AppError> {
        GuildRepository::new(self.db)
            .find_by_guild_id(guild_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Guild {} not found", guild_id)))
    }

    /// Records a guild seen by the bot, keeping its configured timezone.
    pub async fn sync(&self, param: UpsertGuildParam) -> Result<Guild, AppError> {
        let guild = GuildRepository::new(self.db).upsert(param).await?;

        tracing::debug!("Synced guild {} ({})", guild.name, guild.guild_id);

        Ok(guild)
    }

    /// Changes the timezone the bot renders a guild's events in.
    ///
    /// # Arguments
    /// - `guild_id` - Guild to update
    /// - `timezone_name` - IANA zone name, e.g. `Europe/Paris`
    ///
    /// # Returns
    /// - `Ok(Tz)` - The stored zone
    /// - `Err(AppError::EventErr(InvalidTimezone))` - Unknown zone name
    /// - `Err(AppError::NotFound)` - Unknown guild
    pub async fn set_timezone(&self, guild_id: u64, timezone_name: &str) -> Result<Tz, AppError> {
        let timezone = parse_timezone(timezone_name)?;

        if !GuildRepository::new(self.db)
            .set_timezone(guild_id, timezone)
            .await?
        {
            return Err(AppError::NotFound(format!("Guild {} not found", guild_id)));
        }

        tracing::info!("Guild {} timezone set to {}", guild_id, timezone.name());

        Ok(timezone)
    }
}
