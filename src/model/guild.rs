use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct GuildDto {
    #[serde(with = "super::id_string")]
    #[schema(value_type = String)]
    pub guild_id: u64,
    pub name: String,
    pub icon_hash: Option<String>,
    /// IANA timezone used when the bot renders this guild's events.
    pub timezone: String,
}
