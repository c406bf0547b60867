//! Discord bot integration.
//!
//! The bot keeps the guild table in sync with the guilds it is a member of and answers
//! `!`-prefixed chat commands. Commands live in an explicit [`command::CommandRegistry`]
//! built once at startup and shared with the message handler.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild availability, used to record guilds
//! - `GUILD_MESSAGES` - Messages posted in guild channels
//! - `MESSAGE_CONTENT` - Message text, needed to read commands (privileged intent)
//!
//! `MESSAGE_CONTENT` must be enabled in the Discord Developer Portal for the bot
//! application.

pub mod command;
pub mod handler;
pub mod start;
