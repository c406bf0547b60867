use super::*;

/// Expected: Ok(Some) for the first occurrence of a parent
#[tokio::test]
async fn inserts_first_occurrence() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let parent = factory::create_event(db, &guild.guild_id).await?;

    let mut occurrence = new_event(&guild.guild_id, Utc::now().with_timezone(&Tz::UTC));
    occurrence.parent_id = Some(parent.id);
    occurrence.origin_id = Some(parent.id);

    let repo = EventRepository::new(db);
    let created = repo.create_occurrence(occurrence).await?;

    assert_eq!(created.and_then(|e| e.parent_id), Some(parent.id));

    Ok(())
}

/// Tests the unique `parent_id` index.
///
/// Expected: Ok(None) when the parent already has an occurrence
#[tokio::test]
async fn skips_second_occurrence_of_same_parent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let parent = factory::create_event(db, &guild.guild_id).await?;
    factory::event::EventFactory::new(db, &guild.guild_id)
        .parent_id(Some(parent.id))
        .build()
        .await?;

    let mut occurrence = new_event(&guild.guild_id, Utc::now().with_timezone(&Tz::UTC));
    occurrence.parent_id = Some(parent.id);

    let repo = EventRepository::new(db);
    let created = repo.create_occurrence(occurrence).await?;

    assert!(created.is_none());
    assert_eq!(repo.get_by_guild_id(guild.guild_id.parse().unwrap()).await?.len(), 2);

    Ok(())
}
