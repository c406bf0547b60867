use super::*;

/// Tests that the zone survives a round trip through the UTC column.
///
/// Expected: Ok with the same instant and zone read back
#[tokio::test]
async fn stores_instant_and_timezone() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let date = Tz::Europe__Paris
        .with_ymd_and_hms(2020, 10, 10, 10, 10, 0)
        .unwrap();

    let repo = EventRepository::new(db);
    let created = repo.create(new_event(&guild.guild_id, date)).await?;
    let found = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(found.date.local(), date);
    assert_eq!(found.date.timezone_name(), "Europe/Paris");
    assert_eq!(found.date.timezone_offset(), "+0200");
    assert_eq!(found.repetition, RepetitionFrequency::Weekly);
    assert_eq!(found.parent_id, None);

    Ok(())
}

/// Expected: Err when the guild does not exist
#[tokio::test]
async fn fails_for_unknown_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);
    let result = repo
        .create(new_event("404", Utc::now().with_timezone(&Tz::UTC)))
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests that an unknown stored repetition is read as not repeated.
///
/// Expected: Ok with `NotRepeated`
#[tokio::test]
async fn reads_unknown_repetition_as_not_repeated() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let stored = factory::event::EventFactory::new(db, &guild.guild_id)
        .repetition("MONTHLY")
        .build()
        .await?;

    let repo = EventRepository::new(db);
    let event = repo.find_by_id(stored.id).await?.unwrap();

    assert_eq!(event.repetition, RepetitionFrequency::NotRepeated);

    Ok(())
}
