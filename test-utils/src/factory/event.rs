//! Event factory for creating test event entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test events.
///
/// The guild referenced by `guild_id` must already exist.
///
/// # Example
///
/// ```rust,ignore
/// let event = EventFactory::new(&db, &guild.guild_id)
///     .date(Utc::now() + Duration::days(1))
///     .repetition("DAILY")
///     .build()
///     .await?;
/// ```
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    parent_id: Option<i32>,
    origin_id: Option<i32>,
    title: String,
    description: String,
    date: DateTime<Utc>,
    origin_date: Option<DateTime<Utc>>,
    timezone_name: String,
    repetition: String,
}

impl<'a> EventFactory<'a> {
    /// Defaults:
    /// - title: `"Event {id}"`
    /// - description: empty
    /// - date: one day from now
    /// - origin_date: same as `date`
    /// - timezone_name: `"UTC"`
    /// - repetition: `"NOT_REPEATED"`
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: guild_id.into(),
            parent_id: None,
            origin_id: None,
            title: format!("Event {}", id),
            description: String::new(),
            date: Utc::now() + Duration::days(1),
            origin_date: None,
            timezone_name: "UTC".to_string(),
            repetition: "NOT_REPEATED".to_string(),
        }
    }

    pub fn parent_id(mut self, parent_id: Option<i32>) -> Self {
        self.parent_id = parent_id;
        self
    }

    pub fn origin_id(mut self, origin_id: Option<i32>) -> Self {
        self.origin_id = origin_id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Sets the date of the series' authored event, defaults to `date`.
    pub fn origin_date(mut self, origin_date: DateTime<Utc>) -> Self {
        self.origin_date = Some(origin_date);
        self
    }

    pub fn timezone_name(mut self, timezone_name: impl Into<String>) -> Self {
        self.timezone_name = timezone_name.into();
        self
    }

    /// Sets the stored repetition value, e.g. `"WEEKLY"`.
    pub fn repetition(mut self, repetition: impl Into<String>) -> Self {
        self.repetition = repetition.into();
        self
    }

    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        let now = Utc::now();
        entity::event::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            parent_id: ActiveValue::Set(self.parent_id),
            origin_id: ActiveValue::Set(self.origin_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            date: ActiveValue::Set(self.date),
            origin_date: ActiveValue::Set(self.origin_date.unwrap_or(self.date)),
            timezone_name: ActiveValue::Set(self.timezone_name),
            repetition: ActiveValue::Set(self.repetition),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a non-repeating event one day from now in the given guild.
pub async fn create_event(
    db: &DatabaseConnection,
    guild_id: &str,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, guild_id).build().await
}
