use super::*;

#[tokio::test]
async fn stores_valid_timezone() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let guild_id: u64 = guild.guild_id.parse().unwrap();

    let service = GuildService::new(db);
    let timezone = service.set_timezone(guild_id, "Europe/Paris").await?;

    assert_eq!(timezone, Tz::Europe__Paris);
    assert_eq!(service.get_by_id(guild_id).await?.timezone, Tz::Europe__Paris);

    Ok(())
}

/// Expected: Err(EventError::InvalidTimezone) and the stored zone unchanged
#[tokio::test]
async fn rejects_unknown_timezone() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let guild_id: u64 = guild.guild_id.parse().unwrap();

    let service = GuildService::new(db);
    let result = service.set_timezone(guild_id, "Paris").await;

    assert!(matches!(
        result,
        Err(AppError::EventErr(EventError::InvalidTimezone(_)))
    ));
    assert_eq!(service.get_by_id(guild_id).await?.timezone, Tz::UTC);

    Ok(())
}

#[tokio::test]
async fn fails_for_unknown_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GuildService::new(db);
    let result = service.set_timezone(1, "UTC").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
