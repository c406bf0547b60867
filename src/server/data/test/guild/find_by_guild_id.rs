use super::*;

#[tokio::test]
async fn finds_existing_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_guild(db).await?;
    let guild_id: u64 = created.guild_id.parse().unwrap();

    let repo = GuildRepository::new(db);
    let guild = repo.find_by_guild_id(guild_id).await?;

    assert_eq!(guild.map(|g| g.name), Some(created.name));

    Ok(())
}

/// Tests that an unknown timezone stored by hand reads back as UTC.
///
/// Expected: Ok(Some) with timezone UTC
#[tokio::test]
async fn reads_unknown_stored_timezone_as_utc() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild::GuildFactory::new(db)
        .guild_id("42")
        .timezone("Nowhere/Special")
        .build()
        .await?;

    let repo = GuildRepository::new(db);
    let guild = repo.find_by_guild_id(42).await?.unwrap();

    assert_eq!(guild.timezone, Tz::UTC);

    Ok(())
}

#[tokio::test]
async fn returns_none_for_unknown_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);

    assert!(repo.find_by_guild_id(1).await?.is_none());

    Ok(())
}
