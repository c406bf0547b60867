//! Guild factory for creating test guild entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guilds.
///
/// Guild ids are numeric strings so they parse as Discord snowflakes.
pub struct GuildFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    name: String,
    icon_hash: Option<String>,
    timezone: String,
}

impl<'a> GuildFactory<'a> {
    /// Defaults: unique numeric `guild_id`, `"Guild {id}"` name, no icon, `"UTC"` timezone.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: (100_000 + id).to_string(),
            name: format!("Guild {}", id),
            icon_hash: None,
            timezone: "UTC".to_string(),
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn icon_hash(mut self, icon_hash: Option<String>) -> Self {
        self.icon_hash = icon_hash;
        self
    }

    /// Sets the IANA timezone name stored for the guild.
    pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    pub async fn build(self) -> Result<entity::guild::Model, DbErr> {
        let now = Utc::now();
        entity::guild::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            name: ActiveValue::Set(self.name),
            icon_hash: ActiveValue::Set(self.icon_hash),
            timezone: ActiveValue::Set(self.timezone),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild with default values.
pub async fn create_guild(db: &DatabaseConnection) -> Result<entity::guild::Model, DbErr> {
    GuildFactory::new(db).build().await
}
