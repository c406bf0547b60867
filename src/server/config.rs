use chrono::TimeDelta;

use crate::server::error::{config::ConfigError, AppError};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_EVENT_GENERATION_MAX_WEEKS: i64 = 4;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,
    pub discord_bot_token: String,

    pub discord_auth_url: String,
    pub discord_token_url: String,

    /// How far past its series' authored date an occurrence may be generated.
    pub event_generation_limit: TimeDelta,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            discord_client_id: required_var("DISCORD_CLIENT_ID")?,
            discord_client_secret: required_var("DISCORD_CLIENT_SECRET")?,
            discord_redirect_url: required_var("DISCORD_REDIRECT_URL")?,
            discord_bot_token: required_var("DISCORD_BOT_TOKEN")?,
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
            event_generation_limit: parse_max_weeks(
                std::env::var("EVENT_GENERATION_MAX_WEEKS").ok(),
            )?,
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn parse_max_weeks(value: Option<String>) -> Result<TimeDelta, ConfigError> {
    let Some(value) = value else {
        return Ok(TimeDelta::weeks(DEFAULT_EVENT_GENERATION_MAX_WEEKS));
    };

    let invalid = |value: String, reason: String| ConfigError::InvalidEnvVar {
        name: "EVENT_GENERATION_MAX_WEEKS".to_string(),
        value,
        reason,
    };

    let weeks = match value.trim().parse::<i64>() {
        Ok(weeks) => weeks,
        Err(err) => return Err(invalid(value, err.to_string())),
    };

    if weeks <= 0 {
        return Err(invalid(
            value,
            "must be a positive number of weeks".to_string(),
        ));
    }

    TimeDelta::try_weeks(weeks)
        .ok_or_else(|| invalid(value, "is too large to be represented".to_string()))
}
