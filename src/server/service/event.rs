//! Event service: CRUD, weekly listing and lazy generation of occurrences.

use chrono::{TimeDelta, Utc};
use chrono_tz::Tz;
use sea_orm::DatabaseConnection;

use crate::server::{
    config::DEFAULT_EVENT_GENERATION_MAX_WEEKS,
    data::{event::EventRepository, guild::GuildRepository},
    error::{event::EventError, AppError},
    model::{
        event::{Event, EventDate, NewEvent, UpdateEventParam},
        guild::Guild,
        week::WeekRange,
    },
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
    /// How far past its series' authored date an occurrence may be generated.
    generation_limit: TimeDelta,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            generation_limit: TimeDelta::weeks(DEFAULT_EVENT_GENERATION_MAX_WEEKS),
        }
    }

    pub fn with_generation_limit(mut self, generation_limit: TimeDelta) -> Self {
        self.generation_limit = generation_limit;
        self
    }

    async fn require_guild(&self, guild_id: u64) -> Result<Guild, AppError> {
        GuildRepository::new(self.db)
            .find_by_guild_id(guild_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Guild {} not found", guild_id)))
    }

    /// Gets an event by id.
    ///
    /// # Returns
    /// - `Ok(Event)` - Event found
    /// - `Err(AppError::NotFound)` - Unknown event
    pub async fn get_by_id(&self, id: i32) -> Result<Event, AppError> {
        EventRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", id)))
    }

    pub async fn get_all(&self) -> Result<Vec<Event>, AppError> {
        EventRepository::new(self.db).get_all().await
    }

    /// Gets every event of a guild, 404 when the guild is unknown.
    pub async fn get_by_guild(&self, guild_id: u64) -> Result<Vec<Event>, AppError> {
        self.require_guild(guild_id).await?;

        EventRepository::new(self.db).get_by_guild_id(guild_id).await
    }

    /// Creates an authored event in an existing guild.
    pub async fn create(&self, event: NewEvent) -> Result<Event, AppError> {
        self.require_guild(event.guild_id).await?;

        let event = EventRepository::new(self.db).create(event).await?;

        tracing::info!("Created event {} in guild {}", event.id, event.guild_id);

        Ok(event)
    }

    /// Applies explicit field assignments to an event of a guild.
    ///
    /// Without a new date, a new timezone re-expresses the same instant in that zone.
    ///
    /// # Returns
    /// - `Ok(Event)` - The updated event
    /// - `Err(AppError::NotFound)` - Unknown event, or the event belongs to another guild
    pub async fn update(
        &self,
        guild_id: u64,
        id: i32,
        param: UpdateEventParam,
    ) -> Result<Event, AppError> {
        let mut event = self.get_in_guild(guild_id, id).await?;

        if let Some(title) = param.title {
            event.title = title;
        }
        if let Some(description) = param.description {
            event.description = description;
        }
        if let Some(repetition) = param.repetition {
            event.repetition = repetition;
        }

        let timezone = param.timezone.unwrap_or_else(|| event.date.timezone());
        let instant = param.date.unwrap_or_else(|| event.date.utc());
        event.date = EventDate::new(instant.with_timezone(&timezone));

        // An authored event opens its own series window.
        if event.origin_id.is_none() {
            event.origin_date = instant;
        }

        EventRepository::new(self.db).update(event).await
    }

    /// Deletes an event of a guild.
    pub async fn delete(&self, guild_id: u64, id: i32) -> Result<(), AppError> {
        self.get_in_guild(guild_id, id).await?;

        EventRepository::new(self.db).delete(id).await?;

        tracing::info!("Deleted event {} from guild {}", id, guild_id);

        Ok(())
    }

    async fn get_in_guild(&self, guild_id: u64, id: i32) -> Result<Event, AppError> {
        let event = self.get_by_id(id).await?;

        if event.guild_id != guild_id {
            return Err(AppError::NotFound(format!(
                "Event {} not found in guild {}",
                id, guild_id
            )));
        }

        Ok(event)
    }

    /// Lists a guild's events within one ISO week.
    ///
    /// # Arguments
    /// - `guild_id` - Guild whose events are listed
    /// - `year`, `week` - ISO week; missing values come from the current week in `timezone`
    /// - `timezone` - Zone defining the week boundaries, defaults to the guild's zone
    ///
    /// # Returns
    /// - `Ok((WeekRange, Vec<Event>))` - Window and events with `start <= date < end`
    /// - `Err(AppError::EventErr(InvalidWeekNumber))` - Week outside `1..=52`
    /// - `Err(AppError::NotFound)` - Unknown guild
    pub async fn get_weekly(
        &self,
        guild_id: u64,
        year: Option<i32>,
        week: Option<u32>,
        timezone: Option<Tz>,
    ) -> Result<(WeekRange, Vec<Event>), AppError> {
        let guild = self.require_guild(guild_id).await?;
        let timezone = timezone.unwrap_or(guild.timezone);

        let range = WeekRange::resolve(year, week, Utc::now(), timezone)?;

        let events = EventRepository::new(self.db)
            .get_by_guild_id_in_range(
                guild_id,
                range.start.with_timezone(&Utc),
                range.end.with_timezone(&Utc),
            )
            .await?;

        Ok((range, events))
    }

    /// Returns the occurrence following event `id`, generating it if needed.
    ///
    /// An occurrence already generated from this event is returned as is. Otherwise
    /// the next one is built and inserted, unless it would start more than the
    /// generation limit after the date of the series' authored event. That date is
    /// copied onto every occurrence, so deleting the authored event keeps the bound.
    ///
    /// # Returns
    /// - `Ok(Event)` - Existing or newly generated occurrence
    /// - `Err(AppError::NotFound)` - Unknown event
    /// - `Err(AppError::EventErr(NotRepeated))` - The event never repeats
    /// - `Err(AppError::EventErr(GenerationLimitExceeded))` - The series has reached
    ///   the end of its generation window
    pub async fn get_next_occurrence(&self, id: i32) -> Result<Event, AppError> {
        let event_repo = EventRepository::new(self.db);

        if let Some(existing) = event_repo.find_by_parent_id(id).await? {
            return Ok(existing);
        }

        let parent = self.get_by_id(id).await?;
        let next = parent.create_next_occurrence()?;

        if next.date.utc() - next.origin_date > self.generation_limit {
            tracing::debug!(
                "Refusing to generate occurrence of event {} at {}, limit is {} after {}",
                id,
                next.date.utc(),
                self.generation_limit,
                next.origin_date
            );
            return Err(EventError::GenerationLimitExceeded {
                max_period: self.generation_limit,
            }
            .into());
        }

        match event_repo.create_occurrence(next).await? {
            Some(created) => {
                tracing::info!("Generated occurrence {} of event {}", created.id, id);
                Ok(created)
            }
            // Lost the race against a concurrent generation of the same occurrence.
            None => event_repo
                .find_by_parent_id(id)
                .await?
                .ok_or_else(|| AppError::InternalError(format!(
                    "Occurrence of event {} vanished after a conflicting insert",
                    id
                ))),
        }
    }
}
