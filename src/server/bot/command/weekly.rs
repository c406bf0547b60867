use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use serenity::async_trait;

use crate::server::{
    bot::command::{Command, CommandInvocation},
    error::AppError,
    model::{event::Event, week::WeekRange},
    service::event::EventService,
};

pub static EMPTY_WEEK_REPLY: &str = "No events scheduled this week.";

static DAY_FORMAT: &str = "%a %d %b";
static TIME_FORMAT: &str = "%H:%M (%Z)";

/// `!weekly [week] [year]`: lists the guild's events of an ISO week in the guild's zone.
pub struct WeeklyCommand;

#[async_trait]
impl Command for WeeklyCommand {
    fn name(&self) -> &'static str {
        "weekly"
    }

    fn usage(&self) -> &'static str {
        "[week] [year]"
    }

    fn description(&self) -> &'static str {
        "Lists the events of this week, or of the given ISO week."
    }

    async fn execute(
        &self,
        db: &DatabaseConnection,
        invocation: &CommandInvocation,
    ) -> Result<String, AppError> {
        let guild_id = invocation.require_guild()?;

        let week = invocation
            .args
            .first()
            .map(|value| parse_arg::<u32>(value, "week number"))
            .transpose()?;
        let year = invocation
            .args
            .get(1)
            .map(|value| parse_arg::<i32>(value, "year"))
            .transpose()?;

        let (range, events) = EventService::new(db)
            .get_weekly(guild_id, year, week, None)
            .await?;

        Ok(format_weekly(&range, &events))
    }
}

fn parse_arg<T: std::str::FromStr>(value: &str, what: &str) -> Result<T, AppError> {
    value
        .parse()
        .map_err(|_| AppError::BadRequest(format!("'{}' is not a valid {}", value, what)))
}

/// Renders events grouped by local day in the zone of `range`.
///
/// Each day starts with a bold header, each event is one line followed by its
/// description quoted line by line. `events` must be sorted by date.
pub fn format_weekly(range: &WeekRange, events: &[Event]) -> String {
    if events.is_empty() {
        return EMPTY_WEEK_REPLY.to_string();
    }

    let timezone = range.start.timezone();
    let mut days: Vec<String> = Vec::new();
    let mut current_day: Option<NaiveDate> = None;

    for event in events {
        let local = event.date.utc().with_timezone(&timezone);
        let day = local.date_naive();

        if current_day != Some(day) {
            current_day = Some(day);
            days.push(format!("**{}**", local.format(DAY_FORMAT)));
        }

        let Some(block) = days.last_mut() else {
            continue;
        };

        block.push('\n');
        block.push_str(&format!("{}: **{}**", local.format(TIME_FORMAT), event.title));

        for line in event.description.lines() {
            block.push_str("\n> ");
            block.push_str(line);
        }
    }

    days.join("\n\n")
}
