//! Shared helpers for the factory modules.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter backing unique identifiers across all factories.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a guild and a single non-repeating event belonging to it.
///
/// # Returns
/// - `Ok((guild, event))` - Created entities
/// - `Err(DbErr)` - Database error during insert
pub async fn create_event_with_guild(
    db: &DatabaseConnection,
) -> Result<(entity::guild::Model, entity::event::Model), DbErr> {
    let guild = super::guild::create_guild(db).await?;
    let event = super::event::create_event(db, &guild.guild_id).await?;

    Ok((guild, event))
}
