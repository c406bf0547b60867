//! Chat commands and their registry.
//!
//! A message is a command when it starts with [`COMMAND_PREFIX`]. The first word after
//! the prefix names the command and the remaining words are its arguments.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;
use serenity::async_trait;

use crate::server::error::{bot::BotError, AppError};

pub mod help;
pub mod set_timezone;
pub mod weekly;


pub static COMMAND_PREFIX: char = '!';

/// Longest message Discord accepts, in characters.
pub const MESSAGE_MAX_LENGTH: usize = 2000;

/// Context a command runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    /// Guild the message was posted in, `None` for direct messages.
    pub guild_id: Option<u64>,
    pub args: Vec<String>,
}

impl CommandInvocation {
    /// Guild of the invocation, rejecting direct messages.
    pub fn require_guild(&self) -> Result<u64, AppError> {
        self.guild_id.ok_or_else(|| {
            AppError::BadRequest("this command can only be used in a server".to_string())
        })
    }
}

#[async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;

    /// Argument synopsis shown by `!help`, empty when the command takes none.
    fn usage(&self) -> &'static str {
        ""
    }

    fn description(&self) -> &'static str;

    /// Runs the command and returns the reply to post.
    async fn execute(
        &self,
        db: &DatabaseConnection,
        invocation: &CommandInvocation,
    ) -> Result<String, AppError>;
}

/// Command table shared by the message handler.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<&'static str, Box<dyn Command>>,
    /// Registration order, used for listings.
    order: Vec<&'static str>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding `weekly`, `set_timezone` and `help`.
    pub fn with_default_commands() -> Result<Self, AppError> {
        let mut registry = Self::new();

        registry.register(Box::new(weekly::WeeklyCommand))?;
        registry.register(Box::new(set_timezone::SetTimezoneCommand))?;

        let help = help::HelpCommand::from_registry(&registry);
        registry.register(Box::new(help))?;

        Ok(registry)
    }

    /// Adds a command.
    ///
    /// # Returns
    /// - `Ok(())` - Command registered
    /// - `Err(AppError::BotErr(DuplicateCommand))` - A command with that name already exists
    pub fn register(&mut self, command: Box<dyn Command>) -> Result<(), AppError> {
        let name = command.name();

        if self.commands.contains_key(name) {
            return Err(BotError::DuplicateCommand(name.to_string()).into());
        }

        self.commands.insert(name, command);
        self.order.push(name);

        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|command| command.as_ref())
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.order.clone()
    }

    /// Commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Command> {
        self.order
            .iter()
            .filter_map(|name| self.commands.get(name).map(|command| command.as_ref()))
    }
}

/// Splits a message into a command name and its arguments.
///
/// Returns `None` when the message is not a command.
pub fn parse_command_line(content: &str) -> Option<(String, Vec<String>)> {
    let rest = content.trim_start().strip_prefix(COMMAND_PREFIX)?;

    // "! weekly" is not a command
    if rest.starts_with(char::is_whitespace) {
        return None;
    }

    let mut words = rest.split_whitespace();
    let name = words.next()?.to_lowercase();
    let args = words.map(str::to_string).collect();

    Some((name, args))
}

/// Turns a command failure into the reply posted in the channel.
///
/// User-facing errors are echoed, anything else is logged and hidden.
pub fn error_reply(command: &str, err: AppError) -> String {
    match err {
        AppError::EventErr(e) => format!("Failed: {}", e),
        AppError::NotFound(msg) | AppError::BadRequest(msg) => format!("Failed: {}", msg),
        err => {
            tracing::error!("Command '{}' failed: {}", command, err);
            format!("Failed: internal error while running {}{}", COMMAND_PREFIX, command)
        }
    }
}

/// Cuts a reply into chunks Discord accepts, preferring line boundaries.
pub fn split_message(content: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for line in content.split('\n') {
        let line_len = line.chars().count();
        let separator = usize::from(!current.is_empty());

        if current_len + separator + line_len <= MESSAGE_MAX_LENGTH {
            if separator == 1 {
                current.push('\n');
            }
            current.push_str(line);
            current_len += separator + line_len;
            continue;
        }

        if !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }

        let mut chars = line.chars().peekable();
        while chars.peek().is_some() {
            let piece: String = chars.by_ref().take(MESSAGE_MAX_LENGTH).collect();
            current_len = piece.chars().count();
            current = piece;
            if chars.peek().is_some() {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
            }
        }
    }

    if !current.trim().is_empty() {
        chunks.push(current);
    }

    chunks
}
