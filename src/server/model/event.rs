//! Event domain models, zoned dates and occurrence generation.

use chrono::{
    DateTime, FixedOffset, LocalResult, NaiveDateTime, TimeDelta, TimeZone, Utc,
};
use chrono_tz::Tz;
use std::collections::BTreeMap;

use crate::{
    model::event::{CreateEventDto, EventDto, RepetitionFrequency, UpdateEventDto},
    server::{
        error::{event::EventError, AppError},
        util::parse::{parse_timezone, parse_u64_from_string, stored_timezone_or_utc},
    },
};

pub const TITLE_MIN_LENGTH: usize = 4;
pub const TITLE_MAX_LENGTH: usize = 32;
pub const DESCRIPTION_MAX_LENGTH: usize = 2000;

/// Offset-less formats accepted by the creation form.
const NAIVE_FORM_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Instant of an event together with the IANA zone it is expressed in.
///
/// Persisted as the UTC instant plus the zone name and rebuilt by projecting the
/// instant back onto the zone, so a naive date can never be stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventDate(DateTime<Tz>);

impl EventDate {
    pub fn new(date: DateTime<Tz>) -> Self {
        Self(date)
    }

    /// Parses an RFC 3339 string, rejecting input without an explicit offset.
    ///
    /// # Arguments
    /// - `value` - Date such as `2020-10-10T10:10:00+02:00`
    /// - `tz` - Zone the resulting date is expressed in
    pub fn parse_strict(value: &str, tz: Tz) -> Result<Self, EventError> {
        let date = DateTime::parse_from_rfc3339(value.trim()).map_err(|e| {
            EventError::InvalidDate(format!("'{}' is not an RFC 3339 date: {}", value, e))
        })?;

        Ok(Self(date.with_timezone(&tz)))
    }

    /// Parses a date submitted through the creation form.
    ///
    /// RFC 3339 input keeps its instant. An offset-less input is read as a wall-clock
    /// time in `timezone_name`, or in UTC when no zone was submitted.
    ///
    /// # Returns
    /// - `Ok(EventDate)` - Parsed date
    /// - `Err(EventError::InvalidTimezone)` - `timezone_name` is not an IANA zone
    /// - `Err(EventError::InvalidDate)` - Unparsable input, or a local time that is
    ///   skipped or repeated by a DST transition
    pub fn parse_form(value: &str, timezone_name: Option<&str>) -> Result<Self, EventError> {
        let tz = match timezone_name {
            Some(name) => parse_timezone(name)?,
            None => Tz::UTC,
        };
        let value = value.trim();

        if let Ok(date) = DateTime::parse_from_rfc3339(value) {
            return Ok(Self(date.with_timezone(&tz)));
        }

        let naive = NAIVE_FORM_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
            .ok_or_else(|| EventError::InvalidDate(format!("'{}' is not a date", value)))?;

        if timezone_name.is_none() {
            tracing::warn!(
                "Date '{}' submitted without offset or timezone, reading it as UTC",
                value
            );
        }

        match tz.from_local_datetime(&naive) {
            LocalResult::Single(date) => Ok(Self(date)),
            LocalResult::Ambiguous(_, _) => Err(EventError::InvalidDate(format!(
                "'{}' occurs twice in {}",
                value,
                tz.name()
            ))),
            LocalResult::None => Err(EventError::InvalidDate(format!(
                "'{}' does not exist in {}",
                value,
                tz.name()
            ))),
        }
    }

    /// Rebuilds a date from its stored columns.
    pub fn from_stored(utc: DateTime<Utc>, timezone_name: &str) -> Self {
        Self(utc.with_timezone(&stored_timezone_or_utc(timezone_name)))
    }

    pub fn utc(&self) -> DateTime<Utc> {
        self.0.with_timezone(&Utc)
    }

    pub fn local(&self) -> DateTime<Tz> {
        self.0
    }

    pub fn timezone(&self) -> Tz {
        self.0.timezone()
    }

    pub fn timezone_name(&self) -> &'static str {
        self.0.timezone().name()
    }

    /// Signed `HHMM` offset of this instant in its zone, e.g. `+0200`.
    pub fn timezone_offset(&self) -> String {
        self.0.format("%z").to_string()
    }

    pub fn fixed_offset(&self) -> DateTime<FixedOffset> {
        self.0.fixed_offset()
    }

    /// Adds `step` to the local wall clock and projects the result back onto the zone.
    ///
    /// A weekly 10:10 event stays at 10:10 across DST changes. When the target wall
    /// clock time is repeated the earlier instant wins; when it is skipped the step is
    /// added to the instant instead.
    ///
    /// # Returns
    /// - `Some(EventDate)` - Shifted date
    /// - `None` - Result is outside the representable range
    pub fn checked_add_local(&self, step: TimeDelta) -> Option<Self> {
        let tz = self.timezone();
        let naive = self.0.naive_local().checked_add_signed(step)?;

        match tz.from_local_datetime(&naive) {
            LocalResult::Single(date) => Some(Self(date)),
            LocalResult::Ambiguous(earliest, _) => Some(Self(earliest)),
            LocalResult::None => self.0.checked_add_signed(step).map(Self),
        }
    }
}

/// Event ready to be inserted; it has no id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub guild_id: u64,
    /// Occurrence this one was generated from.
    pub parent_id: Option<i32>,
    /// First authored occurrence of the series.
    pub origin_id: Option<i32>,
    pub title: String,
    pub description: String,
    pub date: EventDate,
    /// Date of the series' authored event, the reference of the generation window.
    pub origin_date: DateTime<Utc>,
    pub repetition: RepetitionFrequency,
}

/// Persisted event.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub guild_id: u64,
    pub parent_id: Option<i32>,
    pub origin_id: Option<i32>,
    pub title: String,
    pub description: String,
    pub date: EventDate,
    pub origin_date: DateTime<Utc>,
    pub repetition: RepetitionFrequency,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Converts an entity model to an event domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Event)` - The converted event
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored guild id is not numeric
    pub fn from_entity(entity: entity::event::Model) -> Result<Self, AppError> {
        let guild_id = parse_u64_from_string(entity.guild_id)?;

        Ok(Self {
            id: entity.id,
            guild_id,
            parent_id: entity.parent_id,
            origin_id: entity.origin_id,
            title: entity.title,
            description: entity.description,
            date: EventDate::from_stored(entity.date, &entity.timezone_name),
            origin_date: entity.origin_date,
            repetition: RepetitionFrequency::from_stored(&entity.repetition),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            guild_id: self.guild_id,
            parent_id: self.parent_id,
            origin_id: self.origin_id,
            title: self.title,
            description: self.description,
            date: self.date.fixed_offset(),
            timezone_name: self.date.timezone_name().to_string(),
            timezone_offset: self.date.timezone_offset(),
            repetition: self.repetition,
        }
    }

    /// Id of the authored event this series started from.
    pub fn origin(&self) -> i32 {
        self.origin_id.unwrap_or(self.id)
    }

    /// Builds the occurrence following this one without persisting it.
    ///
    /// # Returns
    /// - `Ok(NewEvent)` - Copy of this event one step later, pointing back to it
    /// - `Err(EventError::NotRepeated)` - The event never repeats
    /// - `Err(EventError::InvalidDate)` - The next date is out of range
    pub fn create_next_occurrence(&self) -> Result<NewEvent, EventError> {
        let step = self
            .repetition
            .to_duration()
            .ok_or(EventError::NotRepeated(self.id))?;

        let date = self.date.checked_add_local(step).ok_or_else(|| {
            EventError::InvalidDate(format!("Next occurrence of event {} is out of range", self.id))
        })?;

        Ok(NewEvent {
            guild_id: self.guild_id,
            parent_id: Some(self.id),
            origin_id: Some(self.origin()),
            title: self.title.clone(),
            description: self.description.clone(),
            date,
            origin_date: self.origin_date,
            repetition: self.repetition,
        })
    }
}

fn validate_title(title: &str, errors: &mut BTreeMap<String, Vec<String>>) {
    let length = title.trim().chars().count();
    if !(TITLE_MIN_LENGTH..=TITLE_MAX_LENGTH).contains(&length) {
        errors.entry("title".to_string()).or_default().push(format!(
            "Title must be between {} and {} characters",
            TITLE_MIN_LENGTH, TITLE_MAX_LENGTH
        ));
    }
}

fn validate_description(description: &str, errors: &mut BTreeMap<String, Vec<String>>) {
    if description.chars().count() > DESCRIPTION_MAX_LENGTH {
        errors
            .entry("description".to_string())
            .or_default()
            .push(format!(
                "Description must be at most {} characters",
                DESCRIPTION_MAX_LENGTH
            ));
    }
}

fn push_error(errors: &mut BTreeMap<String, Vec<String>>, field: &str, err: EventError) {
    errors.entry(field.to_string()).or_default().push(err.to_string());
}

impl NewEvent {
    /// Validates the creation form and builds the authored event to insert.
    ///
    /// # Returns
    /// - `Ok(NewEvent)` - Valid event without parent or origin
    /// - `Err(EventError::InvalidForm)` - Every failed check keyed by field name
    pub fn from_dto(guild_id: u64, dto: CreateEventDto) -> Result<NewEvent, EventError> {
        let mut errors = BTreeMap::new();

        validate_title(&dto.title, &mut errors);
        validate_description(&dto.description, &mut errors);

        let date = match EventDate::parse_form(&dto.date, dto.timezone_name.as_deref()) {
            Ok(date) => Some(date),
            Err(err @ EventError::InvalidTimezone(_)) => {
                push_error(&mut errors, "timezone_name", err);
                None
            }
            Err(err) => {
                push_error(&mut errors, "date", err);
                None
            }
        };

        match date {
            Some(date) if errors.is_empty() => Ok(NewEvent {
                guild_id,
                parent_id: None,
                origin_id: None,
                title: dto.title.trim().to_string(),
                description: dto.description,
                origin_date: date.utc(),
                date,
                repetition: dto.repetition,
            }),
            _ => Err(EventError::InvalidForm(errors)),
        }
    }
}

/// Explicit field assignments applied to an existing event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateEventParam {
    pub title: Option<String>,
    pub description: Option<String>,
    /// New instant, kept in the event's zone unless `timezone` is also set.
    pub date: Option<DateTime<Utc>>,
    pub timezone: Option<Tz>,
    pub repetition: Option<RepetitionFrequency>,
}

impl UpdateEventParam {
    /// Validates an update request. Dates must carry an explicit offset.
    pub fn from_dto(dto: UpdateEventDto) -> Result<Self, EventError> {
        let mut errors = BTreeMap::new();

        if let Some(title) = &dto.title {
            validate_title(title, &mut errors);
        }
        if let Some(description) = &dto.description {
            validate_description(description, &mut errors);
        }

        let timezone = match dto.timezone_name.as_deref().map(parse_timezone) {
            Some(Ok(tz)) => Some(tz),
            Some(Err(err)) => {
                push_error(&mut errors, "timezone_name", err);
                None
            }
            None => None,
        };

        let date = match dto.date.as_deref() {
            Some(value) => match EventDate::parse_strict(value, timezone.unwrap_or(Tz::UTC)) {
                Ok(date) => Some(date.utc()),
                Err(err) => {
                    push_error(&mut errors, "date", err);
                    None
                }
            },
            None => None,
        };

        if !errors.is_empty() {
            return Err(EventError::InvalidForm(errors));
        }

        Ok(Self {
            title: dto.title.map(|title| title.trim().to_string()),
            description: dto.description,
            date,
            timezone,
            repetition: dto.repetition,
        })
    }
}
