use super::*;

#[tokio::test]
async fn stores_guild_timezone() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild::GuildFactory::new(db)
        .guild_id("77")
        .build()
        .await?;

    let repo = GuildRepository::new(db);
    let updated = repo.set_timezone(77, Tz::America__New_York).await?;
    let guild = repo.find_by_guild_id(77).await?.unwrap();

    assert!(updated);
    assert_eq!(guild.timezone, Tz::America__New_York);

    Ok(())
}

/// Expected: Ok(false) when the guild does not exist
#[tokio::test]
async fn reports_missing_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);

    assert!(!repo.set_timezone(77, Tz::UTC).await?);

    Ok(())
}
