//! ISO week windows used by the weekly event listing.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc, Weekday};
use chrono_tz::Tz;

use crate::server::error::event::EventError;

/// Half-open window `[start, end)` covering one ISO week in a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekRange {
    pub year: i32,
    pub week: u32,
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

/// Computes the window of ISO week `week` of `year` in `tz`.
///
/// `start` is local midnight of the week's Monday and `end` is local midnight of the
/// following Monday. Only weeks `1..=52` are accepted, even for years that have an
/// ISO week 53.
///
/// # Returns
/// - `Ok((start, end))` - Window bounds in `tz`
/// - `Err(EventError::InvalidWeekNumber)` - `week` is outside `1..=52`
pub fn week_time_range(
    year: i32,
    week: u32,
    tz: Tz,
) -> Result<(DateTime<Tz>, DateTime<Tz>), EventError> {
    if !(1..=52).contains(&week) {
        return Err(EventError::InvalidWeekNumber(week));
    }

    let monday = NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)
        .ok_or(EventError::InvalidWeekNumber(week))?;
    let next_monday = monday
        .checked_add_days(chrono::Days::new(7))
        .ok_or(EventError::InvalidWeekNumber(week))?;

    Ok((local_midnight(monday, tz)?, local_midnight(next_monday, tz)?))
}

impl WeekRange {
    /// Window for an explicit year and week.
    pub fn new(year: i32, week: u32, tz: Tz) -> Result<Self, EventError> {
        let (start, end) = week_time_range(year, week, tz)?;

        Ok(Self {
            year,
            week,
            start,
            end,
        })
    }

    /// Resolves optional query values.
    ///
    /// Missing values are taken from the ISO week containing `now` as seen from `tz`.
    pub fn resolve(
        year: Option<i32>,
        week: Option<u32>,
        now: DateTime<Utc>,
        tz: Tz,
    ) -> Result<Self, EventError> {
        let iso = now.with_timezone(&tz).iso_week();

        Self::new(year.unwrap_or(iso.year()), week.unwrap_or(iso.week()), tz)
    }

    #[cfg(test)]
    pub fn contains(&self, date: DateTime<Utc>) -> bool {
        self.start <= date && date < self.end
    }
}

/// First instant of `date` in `tz`.
///
/// Zones that skip midnight on a DST change start the day at the first valid minute.
fn local_midnight(date: NaiveDate, tz: Tz) -> Result<DateTime<Tz>, EventError> {
    let midnight: NaiveDateTime = date.and_time(chrono::NaiveTime::MIN);

    (0..=120)
        .map(|minutes| midnight + TimeDelta::minutes(minutes))
        .find_map(|candidate| tz.from_local_datetime(&candidate).earliest())
        .ok_or_else(|| EventError::InvalidDate(format!("No local midnight on {} in {}", date, tz.name())))
}
