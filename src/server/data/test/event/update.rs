use super::*;

#[tokio::test]
async fn writes_edited_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let stored = factory::create_event(db, &guild.guild_id).await?;

    let repo = EventRepository::new(db);
    let mut event = repo.find_by_id(stored.id).await?.unwrap();
    event.title = "Renamed".to_string();
    event.repetition = RepetitionFrequency::Daily;
    event.date = EventDate::new(event.date.local().with_timezone(&Tz::Asia__Tokyo));

    let updated = repo.update(event).await?;

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.repetition, RepetitionFrequency::Daily);
    assert_eq!(updated.date.timezone_name(), "Asia/Tokyo");
    assert_eq!(updated.date.utc(), stored.date);
    assert_eq!(updated.guild_id.to_string(), guild.guild_id);

    Ok(())
}
