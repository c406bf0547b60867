use chrono_tz::Tz;

use crate::server::{
    error::{event::EventError, AppError},
    service::guild::GuildService,
};
use test_utils::{builder::TestBuilder, factory};

mod set_timezone;
