//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::user::UserDto,
    server::{error::AppError, util::parse::parse_u64_from_string},
};

/// User who logged in through Discord.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Discord ID of the user
    pub discord_id: u64,
    /// Display name of the user.
    pub name: String,
    /// Whether the user has admin privileges.
    pub admin: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            discord_id: self.discord_id,
            name: self.name,
            admin: self.admin,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(ParseStringId))` - Failed to convert stored user
    ///   Discord ID from String to u64
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let discord_id = parse_u64_from_string(entity.discord_id)?;

        Ok(Self {
            discord_id,
            name: entity.name,
            admin: entity.admin,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for upserting a user during login.
///
/// `is_admin` of `None` keeps the stored admin flag untouched.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    /// Discord ID of the user
    pub discord_id: u64,
    /// Display name of the user.
    pub name: String,
    /// Optional admin status (None preserves existing admin status, Some updates it).
    pub is_admin: Option<bool>,
}
