//! User data repository for database operations.

use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};

use crate::server::{
    error::AppError,
    model::user::{UpsertUserParam, User},
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a user from parameter model.
    ///
    /// The name is always refreshed. The admin flag is only written when `is_admin` is
    /// `Some`, so a regular login never revokes it.
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated user
    /// - `Err(AppError::DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<User, AppError> {
        let mut update_columns = vec![entity::user::Column::Name];

        if param.is_admin.is_some() {
            update_columns.push(entity::user::Column::Admin);
        }

        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            discord_id: ActiveValue::Set(param.discord_id.to_string()),
            name: ActiveValue::Set(param.name),
            admin: ActiveValue::Set(param.is_admin.unwrap_or(false)),
            created_at: ActiveValue::Set(chrono::Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::DiscordId)
                .update_columns(update_columns)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Finds a user by their Discord ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user found with that Discord ID
    /// - `Err(AppError)` - Database error or corrupt stored id
    pub async fn find_by_discord_id(&self, user_id: u64) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find_by_id(user_id.to_string())
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    /// Checks if any admin users exist in the database.
    ///
    /// Used on login to promote the very first user to admin.
    pub async fn admin_exists(&self) -> Result<bool, AppError> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Admin.eq(true))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }
}
