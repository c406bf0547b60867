use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::async_trait;

use crate::server::{
    bot::command::{Command, CommandInvocation},
    error::AppError,
    service::guild::GuildService,
};

/// `!set_timezone <zone>`: changes the zone `!weekly` renders this guild's events in.
pub struct SetTimezoneCommand;

#[async_trait]
impl Command for SetTimezoneCommand {
    fn name(&self) -> &'static str {
        "set_timezone"
    }

    fn usage(&self) -> &'static str {
        "<IANA zone>"
    }

    fn description(&self) -> &'static str {
        "Sets the timezone used to display this server's events."
    }

    async fn execute(
        &self,
        db: &DatabaseConnection,
        invocation: &CommandInvocation,
    ) -> Result<String, AppError> {
        let guild_id = invocation.require_guild()?;

        let Some(timezone_name) = invocation.args.first() else {
            return Err(AppError::BadRequest(
                "missing timezone, e.g. !set_timezone Europe/Paris".to_string(),
            ));
        };

        let timezone = GuildService::new(db)
            .set_timezone(guild_id, timezone_name)
            .await?;

        Ok(format!(
            "Done: timezone was modified to {} ({})",
            timezone.name(),
            Utc::now().with_timezone(&timezone).format("UTC%z")
        ))
    }
}
