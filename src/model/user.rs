use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UserDto {
    #[serde(with = "super::id_string")]
    #[schema(value_type = String)]
    pub discord_id: u64,
    pub name: String,
    pub admin: bool,
}
