//! Event data repository.
//!
//! Events belong to a guild through `guild_id`; listing a guild's events is always an
//! explicit query here rather than a loaded relation.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, SqlErr,
};

use crate::server::{
    error::AppError,
    model::event::{Event, NewEvent},
};

pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new event.
    ///
    /// # Returns
    /// - `Ok(Event)` - The persisted event with its assigned id
    /// - `Err(AppError::DbErr)` - Database error, including a missing guild or an
    ///   occupied `parent_id`
    pub async fn create(&self, event: NewEvent) -> Result<Event, AppError> {
        let entity = self.insert(event).await?;

        Event::from_entity(entity)
    }

    /// Inserts a generated occurrence unless its parent already has one.
    ///
    /// `parent_id` is unique, so when two requests generate the same occurrence only
    /// one insert succeeds.
    ///
    /// # Returns
    /// - `Ok(Some(Event))` - The occurrence was inserted
    /// - `Ok(None)` - Another occurrence with the same parent already exists
    /// - `Err(AppError)` - Any other database error
    pub async fn create_occurrence(&self, event: NewEvent) -> Result<Option<Event>, AppError> {
        match self.insert(event).await {
            Ok(entity) => Ok(Some(Event::from_entity(entity)?)),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn insert(&self, event: NewEvent) -> Result<entity::event::Model, DbErr> {
        let now = Utc::now();

        entity::event::ActiveModel {
            guild_id: ActiveValue::Set(event.guild_id.to_string()),
            parent_id: ActiveValue::Set(event.parent_id),
            origin_id: ActiveValue::Set(event.origin_id),
            title: ActiveValue::Set(event.title),
            description: ActiveValue::Set(event.description),
            date: ActiveValue::Set(event.date.utc()),
            origin_date: ActiveValue::Set(event.origin_date),
            timezone_name: ActiveValue::Set(event.date.timezone_name().to_string()),
            repetition: ActiveValue::Set(event.repetition.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Event>, AppError> {
        let entity = entity::prelude::Event::find_by_id(id).one(self.db).await?;

        entity.map(Event::from_entity).transpose()
    }

    /// Finds the occurrence generated from `parent_id`, if any.
    pub async fn find_by_parent_id(&self, parent_id: i32) -> Result<Option<Event>, AppError> {
        let entity = entity::prelude::Event::find()
            .filter(entity::event::Column::ParentId.eq(parent_id))
            .one(self.db)
            .await?;

        entity.map(Event::from_entity).transpose()
    }

    /// Gets all events ordered by date.
    pub async fn get_all(&self) -> Result<Vec<Event>, AppError> {
        entity::prelude::Event::find()
            .order_by_asc(entity::event::Column::Date)
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Event::from_entity)
            .collect()
    }

    /// Gets all events of a guild ordered by date.
    pub async fn get_by_guild_id(&self, guild_id: u64) -> Result<Vec<Event>, AppError> {
        entity::prelude::Event::find()
            .filter(entity::event::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::event::Column::Date)
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Event::from_entity)
            .collect()
    }

    /// Gets a guild's events with `start <= date < end`, ordered by date.
    pub async fn get_by_guild_id_in_range(
        &self,
        guild_id: u64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Event>, AppError> {
        entity::prelude::Event::find()
            .filter(entity::event::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::event::Column::Date.gte(start))
            .filter(entity::event::Column::Date.lt(end))
            .order_by_asc(entity::event::Column::Date)
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Event::from_entity)
            .collect()
    }

    /// Writes every editable field of `event` back to its row.
    ///
    /// # Returns
    /// - `Ok(Event)` - The updated event
    /// - `Err(AppError::DbErr)` - Database error, or no row with this id
    pub async fn update(&self, event: Event) -> Result<Event, AppError> {
        let entity = entity::event::ActiveModel {
            id: ActiveValue::Unchanged(event.id),
            title: ActiveValue::Set(event.title),
            description: ActiveValue::Set(event.description),
            date: ActiveValue::Set(event.date.utc()),
            origin_date: ActiveValue::Set(event.origin_date),
            timezone_name: ActiveValue::Set(event.date.timezone_name().to_string()),
            repetition: ActiveValue::Set(event.repetition.as_str().to_string()),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Event::from_entity(entity)
    }

    /// Deletes an event. Occurrences generated from it lose their `parent_id`.
    ///
    /// # Returns
    /// - `Ok(true)` - Event deleted
    /// - `Ok(false)` - No event with this id
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Event::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
