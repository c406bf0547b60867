use chrono::{DateTime, FixedOffset, TimeDelta};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// How often an event repeats.
///
/// Unknown values coming from clients or from the database decode to `NotRepeated`
/// with a warning instead of failing.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "String")]
pub enum RepetitionFrequency {
    #[default]
    NotRepeated,
    Daily,
    Weekly,
}

impl RepetitionFrequency {
    /// Fixed step between two occurrences, `None` for events that never repeat.
    pub fn to_duration(self) -> Option<TimeDelta> {
        match self {
            Self::NotRepeated => None,
            Self::Daily => Some(TimeDelta::days(1)),
            Self::Weekly => Some(TimeDelta::weeks(1)),
        }
    }

    /// Name stored in the `event.repetition` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotRepeated => "NOT_REPEATED",
            Self::Daily => "DAILY",
            Self::Weekly => "WEEKLY",
        }
    }

    /// Decodes a stored or submitted value, falling back to `NotRepeated`.
    pub fn from_stored(value: &str) -> Self {
        match value {
            "NOT_REPEATED" => Self::NotRepeated,
            "DAILY" => Self::Daily,
            "WEEKLY" => Self::Weekly,
            other => {
                tracing::warn!(
                    "Unknown repetition frequency {:?}, treating event as not repeated",
                    other
                );
                Self::NotRepeated
            }
        }
    }
}

impl From<String> for RepetitionFrequency {
    fn from(value: String) -> Self {
        Self::from_stored(&value)
    }
}

impl std::fmt::Display for RepetitionFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct EventDto {
    pub id: i32,
    #[serde(with = "super::id_string")]
    #[schema(value_type = String)]
    pub guild_id: u64,
    pub parent_id: Option<i32>,
    pub origin_id: Option<i32>,
    pub title: String,
    pub description: String,
    /// Event instant expressed in its own timezone, RFC 3339.
    pub date: DateTime<FixedOffset>,
    pub timezone_name: String,
    /// Signed `HHMM` offset of `date`, e.g. `+0200`.
    pub timezone_offset: String,
    pub repetition: RepetitionFrequency,
}

/// Event creation form.
///
/// `date` accepts RFC 3339 or an offset-less `YYYY-MM-DDTHH:MM[:SS]` which is then
/// read in `timezone_name` (UTC when omitted).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CreateEventDto {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: String,
    #[serde(default)]
    pub repetition: RepetitionFrequency,
    #[serde(default)]
    pub timezone_name: Option<String>,
}

/// Partial update; absent fields are left untouched.
///
/// `date` must carry an explicit offset.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct UpdateEventDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub timezone_name: Option<String>,
    pub repetition: Option<RepetitionFrequency>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct WeeklyEventsDto {
    pub year: i32,
    pub week: u32,
    pub timezone: String,
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    pub events: Vec<EventDto>,
}
