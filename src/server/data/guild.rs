//! Guild data repository.

use chrono::Utc;
use chrono_tz::Tz;
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    error::AppError,
    model::guild::{Guild, UpsertGuildParam},
};

pub struct GuildRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a guild or refreshes its Discord name and icon.
    ///
    /// New guilds start in UTC; the timezone of an existing guild is left untouched.
    ///
    /// # Returns
    /// - `Ok(Guild)` - The created or updated guild
    /// - `Err(AppError::DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertGuildParam) -> Result<Guild, AppError> {
        let now = Utc::now();

        let entity = entity::prelude::Guild::insert(entity::guild::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            name: ActiveValue::Set(param.name),
            icon_hash: ActiveValue::Set(param.icon_hash),
            timezone: ActiveValue::Set(Tz::UTC.name().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::column(entity::guild::Column::GuildId)
                .update_columns([
                    entity::guild::Column::Name,
                    entity::guild::Column::IconHash,
                    entity::guild::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Guild::from_entity(entity)
    }

    pub async fn find_by_guild_id(&self, guild_id: u64) -> Result<Option<Guild>, AppError> {
        let entity = entity::prelude::Guild::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?;

        entity.map(Guild::from_entity).transpose()
    }

    /// Gets every known guild ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Guild>, AppError> {
        entity::prelude::Guild::find()
            .order_by_asc(entity::guild::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(Guild::from_entity)
            .collect()
    }

    /// Stores the timezone the bot renders this guild's events in.
    ///
    /// # Returns
    /// - `Ok(true)` - Timezone updated
    /// - `Ok(false)` - No guild with this id
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn set_timezone(&self, guild_id: u64, timezone: Tz) -> Result<bool, AppError> {
        let result = entity::prelude::Guild::update_many()
            .filter(entity::guild::Column::GuildId.eq(guild_id.to_string()))
            .col_expr(
                entity::guild::Column::Timezone,
                Expr::value(timezone.name().to_string()),
            )
            .col_expr(entity::guild::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
