use super::*;

/// Tests that the window follows the guild timezone when none is requested.
///
/// Expected: Ok with Paris midnights as bounds and only the events inside them
#[tokio::test]
async fn lists_week_in_guild_timezone() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::guild::GuildFactory::new(db)
        .timezone("Europe/Paris")
        .build()
        .await?;
    let guild_id: u64 = guild.guild_id.parse().unwrap();

    let monday_midnight = factory::event::EventFactory::new(db, &guild.guild_id)
        .date(paris(2020, 10, 12, 0, 0).with_timezone(&Utc))
        .build()
        .await?;
    let sunday_night = factory::event::EventFactory::new(db, &guild.guild_id)
        .date(paris(2020, 10, 18, 23, 59).with_timezone(&Utc))
        .build()
        .await?;
    // Sunday 22:30 UTC is already Monday 00:30 in Paris.
    let utc_sunday = factory::event::EventFactory::new(db, &guild.guild_id)
        .date(utc(2020, 10, 11, 22, 30))
        .build()
        .await?;
    factory::event::EventFactory::new(db, &guild.guild_id)
        .date(paris(2020, 10, 19, 0, 0).with_timezone(&Utc))
        .build()
        .await?;

    let service = EventService::new(db);
    let (range, events) = service
        .get_weekly(guild_id, Some(2020), Some(42), None)
        .await?;

    assert_eq!(range.start, paris(2020, 10, 12, 0, 0));
    assert_eq!(range.end, paris(2020, 10, 19, 0, 0));

    let ids: Vec<i32> = events.into_iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![monday_midnight.id, utc_sunday.id, sunday_night.id]);

    Ok(())
}

/// Expected: Ok with UTC bounds when a timezone is requested explicitly
#[tokio::test]
async fn requested_timezone_overrides_guild_timezone() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::guild::GuildFactory::new(db)
        .timezone("Europe/Paris")
        .build()
        .await?;

    let service = EventService::new(db);
    let (range, _) = service
        .get_weekly(guild.guild_id.parse().unwrap(), Some(2020), Some(42), Some(Tz::UTC))
        .await?;

    assert_eq!(range.start, utc(2020, 10, 12, 0, 0));
    assert_eq!(range.end, utc(2020, 10, 19, 0, 0));

    Ok(())
}

/// Expected: Err(EventError::InvalidWeekNumber) for week 53
#[tokio::test]
async fn rejects_week_53() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;

    let service = EventService::new(db);
    let result = service
        .get_weekly(guild.guild_id.parse().unwrap(), Some(2020), Some(53), None)
        .await;

    assert!(matches!(
        result,
        Err(AppError::EventErr(EventError::InvalidWeekNumber(53)))
    ));

    Ok(())
}

/// Expected: Err(AppError::NotFound) for an unknown guild
#[tokio::test]
async fn fails_for_unknown_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = EventService::new(db);
    let result = service.get_weekly(1, None, None, None).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
