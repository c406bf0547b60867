use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;

use crate::{
    model::event::RepetitionFrequency,
    server::{
        data::event::EventRepository,
        error::AppError,
        model::event::{EventDate, NewEvent},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod create_occurrence;
mod delete;
mod get_by_guild_id;
mod update;

fn new_event(guild_id: &str, date: DateTime<Tz>) -> NewEvent {
    NewEvent {
        guild_id: guild_id.parse().unwrap(),
        parent_id: None,
        origin_id: None,
        title: "Raid night".to_string(),
        description: "Bring flasks".to_string(),
        date: EventDate::new(date),
        origin_date: date.with_timezone(&Utc),
        repetition: RepetitionFrequency::Weekly,
    }
}
