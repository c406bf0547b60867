use chrono_tz::Tz;

use crate::server::{data::guild::GuildRepository, error::AppError, model::guild::UpsertGuildParam};
use test_utils::{builder::TestBuilder, factory};

mod find_by_guild_id;
mod set_timezone;
