use super::*;

/// Tests that changing only the timezone keeps the instant.
///
/// Expected: Ok with the same UTC instant expressed in Tokyo
#[tokio::test]
async fn reexpresses_instant_in_new_timezone() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let stored = factory::event::EventFactory::new(db, &guild.guild_id)
        .date(utc(2020, 10, 10, 8, 10))
        .timezone_name("Europe/Paris")
        .build()
        .await?;

    let service = EventService::new(db);
    let updated = service
        .update(
            guild.guild_id.parse().unwrap(),
            stored.id,
            UpdateEventParam {
                title: Some("Renamed".to_string()),
                timezone: Some(Tz::Asia__Tokyo),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.date.utc(), stored.date);
    assert_eq!(updated.date.timezone_name(), "Asia/Tokyo");
    assert_eq!(updated.date.local().hour(), 17);

    Ok(())
}

/// Expected: Err(AppError::NotFound) when the event belongs to another guild
#[tokio::test]
async fn rejects_event_of_other_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let other = factory::create_guild(db).await?;
    let stored = factory::create_event(db, &other.guild_id).await?;

    let service = EventService::new(db);
    let result = service
        .update(
            guild.guild_id.parse().unwrap(),
            stored.id,
            UpdateEventParam::default(),
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that moving an authored event moves its generation window with it.
///
/// Expected: Ok with `origin_date` following the new date
#[tokio::test]
async fn moving_authored_event_moves_window() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let stored = factory::event::EventFactory::new(db, &guild.guild_id)
        .date(utc(2020, 10, 10, 8, 10))
        .repetition("WEEKLY")
        .build()
        .await?;

    let service = EventService::new(db);
    let updated = service
        .update(
            guild.guild_id.parse().unwrap(),
            stored.id,
            UpdateEventParam {
                date: Some(utc(2020, 12, 5, 8, 10)),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.origin_date, utc(2020, 12, 5, 8, 10));

    Ok(())
}

/// Expected: Ok with the series' `origin_date` untouched when an occurrence moves
#[tokio::test]
async fn moving_occurrence_keeps_window() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let origin = factory::event::EventFactory::new(db, &guild.guild_id)
        .date(utc(2020, 10, 10, 8, 10))
        .repetition("WEEKLY")
        .build()
        .await?;

    let service = EventService::new(db);
    let next = service.get_next_occurrence(origin.id).await?;
    let updated = service
        .update(
            guild.guild_id.parse().unwrap(),
            next.id,
            UpdateEventParam {
                date: Some(utc(2020, 10, 18, 8, 10)),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.origin_date, origin.date);

    Ok(())
}
