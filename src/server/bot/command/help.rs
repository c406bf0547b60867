use sea_orm::DatabaseConnection;
use serenity::async_trait;

use crate::server::{
    bot::command::{Command, CommandInvocation, CommandRegistry, COMMAND_PREFIX},
    error::AppError,
};

pub struct HelpCommand {
    listing: String,
}

impl HelpCommand {
    /// Snapshots the commands registered so far, followed by `help` itself.
    pub fn from_registry(registry: &CommandRegistry) -> Self {
        let mut lines: Vec<String> = registry
            .iter()
            .map(|command| help_line(command.name(), command.usage(), command.description()))
            .collect();
        lines.push(help_line(HELP_NAME, "", HELP_DESCRIPTION));

        Self {
            listing: format!("Available commands:\n{}", lines.join("\n")),
        }
    }
}

static HELP_NAME: &str = "help";
static HELP_DESCRIPTION: &str = "Lists the available commands.";

fn help_line(name: &str, usage: &str, description: &str) -> String {
    if usage.is_empty() {
        format!("`{}{}` - {}", COMMAND_PREFIX, name, description)
    } else {
        format!("`{}{} {}` - {}", COMMAND_PREFIX, name, usage, description)
    }
}

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        HELP_NAME
    }

    fn description(&self) -> &'static str {
        HELP_DESCRIPTION
    }

    async fn execute(
        &self,
        _db: &DatabaseConnection,
        _invocation: &CommandInvocation,
    ) -> Result<String, AppError> {
        Ok(self.listing.clone())
    }
}
