use super::*;

/// Tests generating the next weekly occurrence in the event's own zone.
///
/// Expected: Ok with an event 7 days later at the same Paris wall-clock time
#[tokio::test]
async fn generates_weekly_occurrence() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let parent = factory::event::EventFactory::new(db, &guild.guild_id)
        .title("Raid night")
        .description("Bring flasks")
        .date(paris(2020, 10, 10, 10, 10).with_timezone(&Utc))
        .timezone_name("Europe/Paris")
        .repetition("WEEKLY")
        .build()
        .await?;

    let service = EventService::new(db);
    let next = service.get_next_occurrence(parent.id).await?;

    assert_ne!(next.id, parent.id);
    assert_eq!(next.parent_id, Some(parent.id));
    assert_eq!(next.origin_id, Some(parent.id));
    assert_eq!(next.origin_date, parent.date);
    assert_eq!(next.date.local(), paris(2020, 10, 17, 10, 10));
    assert_eq!(next.date.timezone_name(), "Europe/Paris");
    assert_eq!(next.title, "Raid night");
    assert_eq!(next.description, "Bring flasks");
    assert_eq!(next.repetition, RepetitionFrequency::Weekly);

    Ok(())
}

/// Tests that asking twice returns the same stored occurrence.
///
/// Expected: Ok with the same id and a single generated row
#[tokio::test]
async fn is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let parent = factory::event::EventFactory::new(db, &guild.guild_id)
        .date(utc(2020, 10, 2, 0, 0))
        .repetition("DAILY")
        .build()
        .await?;

    let service = EventService::new(db);
    let first = service.get_next_occurrence(parent.id).await?;
    let second = service.get_next_occurrence(parent.id).await?;

    assert_eq!(first.id, second.id);
    assert_eq!(
        service
            .get_by_guild(guild.guild_id.parse().unwrap())
            .await?
            .len(),
        2
    );

    Ok(())
}

/// Tests that an occurrence created elsewhere is returned unchanged.
///
/// Expected: Ok with the pre-existing child, even though its date differs
#[tokio::test]
async fn returns_existing_child_unchanged() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let parent = factory::event::EventFactory::new(db, &guild.guild_id)
        .repetition("WEEKLY")
        .build()
        .await?;
    let child = factory::event::EventFactory::new(db, &guild.guild_id)
        .parent_id(Some(parent.id))
        .title("Moved")
        .date(parent.date + TimeDelta::days(8))
        .build()
        .await?;

    let service = EventService::new(db);
    let next = service.get_next_occurrence(parent.id).await?;

    assert_eq!(next.id, child.id);
    assert_eq!(next.title, "Moved");

    Ok(())
}

/// Expected: Err(EventError::NotRepeated)
#[tokio::test]
async fn fails_for_not_repeated_event() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let parent = factory::create_event(db, &guild.guild_id).await?;

    let service = EventService::new(db);
    let result = service.get_next_occurrence(parent.id).await;

    assert!(matches!(
        result,
        Err(AppError::EventErr(EventError::NotRepeated(id))) if id == parent.id
    ));

    Ok(())
}

/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_event() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = EventService::new(db);
    let result = service.get_next_occurrence(404).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests the default four week generation limit on a series that started in the past.
///
/// Occurrences up to four weeks past the authored date are generated and the fifth is
/// refused, however long ago the series started.
///
/// Expected: four Ok, then Err(GenerationLimitExceeded) with a 4 week period
#[tokio::test]
async fn refuses_occurrences_past_the_limit() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let origin = factory::event::EventFactory::new(db, &guild.guild_id)
        .date(utc(2020, 10, 10, 11, 0))
        .repetition("WEEKLY")
        .build()
        .await?;

    let service = EventService::new(db);
    let mut current = origin.id;
    for weeks in 1..=4 {
        let next = service.get_next_occurrence(current).await?;
        assert_eq!(next.date.utc(), origin.date + TimeDelta::weeks(weeks));
        assert_eq!(next.origin_id, Some(origin.id));
        current = next.id;
    }

    let result = service.get_next_occurrence(current).await;

    assert!(matches!(
        result,
        Err(AppError::EventErr(EventError::GenerationLimitExceeded { max_period }))
            if max_period == TimeDelta::weeks(4)
    ));

    Ok(())
}

/// Tests that walking a long series stops within the window.
///
/// Expected: no generated occurrence more than four weeks after the authored date
#[tokio::test]
async fn never_walks_past_the_window() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let origin = factory::event::EventFactory::new(db, &guild.guild_id)
        .date(utc(2020, 9, 1, 18, 30))
        .repetition("DAILY")
        .build()
        .await?;

    let service = EventService::new(db);
    let mut current = origin.id;
    let mut generated = 0;
    for _ in 0..60 {
        match service.get_next_occurrence(current).await {
            Ok(next) => {
                assert!(next.date.utc() - origin.date <= TimeDelta::weeks(4));
                generated += 1;
                current = next.id;
            }
            Err(AppError::EventErr(EventError::GenerationLimitExceeded { .. })) => break,
            Err(err) => return Err(err),
        }
    }

    assert_eq!(generated, 28);

    Ok(())
}

/// Tests that deleting the authored event does not reopen the window.
///
/// Expected: the series still stops four weeks after the deleted event's date
#[tokio::test]
async fn limit_survives_deleting_the_authored_event() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let guild_id: u64 = guild.guild_id.parse().unwrap();
    let origin = factory::event::EventFactory::new(db, &guild.guild_id)
        .date(utc(2020, 11, 2, 20, 0))
        .repetition("WEEKLY")
        .build()
        .await?;

    let service = EventService::new(db);
    let first = service.get_next_occurrence(origin.id).await?;

    service.delete(guild_id, origin.id).await?;

    let mut current = first.id;
    for _ in 2..=4 {
        let next = service.get_next_occurrence(current).await?;
        assert_eq!(next.origin_date, origin.date);
        current = next.id;
    }

    let result = service.get_next_occurrence(current).await;

    assert!(matches!(
        result,
        Err(AppError::EventErr(EventError::GenerationLimitExceeded { .. }))
    ));

    Ok(())
}

/// Expected: Ok for the first daily occurrence, then Err with a one day limit
#[tokio::test]
async fn applies_configured_limit() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let origin = factory::event::EventFactory::new(db, &guild.guild_id)
        .date(utc(2020, 10, 1, 12, 0))
        .repetition("DAILY")
        .build()
        .await?;

    let service = EventService::new(db).with_generation_limit(TimeDelta::days(1));
    let first = service.get_next_occurrence(origin.id).await?;
    assert_eq!(first.date.utc(), utc(2020, 10, 2, 12, 0));

    let refused = service.get_next_occurrence(first.id).await;

    assert!(matches!(
        refused,
        Err(AppError::EventErr(EventError::GenerationLimitExceeded { max_period }))
            if max_period == TimeDelta::days(1)
    ));

    Ok(())
}

/// Tests that the local wall-clock time is kept across the end of summer time.
///
/// Expected: Ok at 10:10 Paris, now with a +0100 offset
#[tokio::test]
async fn keeps_wall_clock_across_dst_change() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let parent = factory::event::EventFactory::new(db, &guild.guild_id)
        .date(paris(2020, 10, 24, 10, 10).with_timezone(&Utc))
        .timezone_name("Europe/Paris")
        .repetition("WEEKLY")
        .build()
        .await?;

    let service = EventService::new(db);
    let next = service.get_next_occurrence(parent.id).await?;

    assert_eq!(next.date.local().hour(), 10);
    assert_eq!(next.date.timezone_offset(), "+0100");
    assert_eq!(next.date.local(), paris(2020, 10, 31, 10, 10));

    Ok(())
}
