use chrono::{DateTime, TimeDelta, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

use crate::{
    model::event::RepetitionFrequency,
    server::{
        error::{event::EventError, AppError},
        model::event::UpdateEventParam,
        service::event::EventService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_next_occurrence;
mod get_weekly;
mod update;

fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

fn paris(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Tz> {
    Tz::Europe__Paris
        .with_ymd_and_hms(y, m, d, h, min, 0)
        .unwrap()
}
