use super::*;

/// Expected: Ok with only the guild's events, ordered by date
#[tokio::test]
async fn lists_only_events_of_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let other = factory::create_guild(db).await?;
    let now = Utc::now();

    let later = factory::event::EventFactory::new(db, &guild.guild_id)
        .date(now + TimeDelta::days(2))
        .build()
        .await?;
    let sooner = factory::event::EventFactory::new(db, &guild.guild_id)
        .date(now + TimeDelta::days(1))
        .build()
        .await?;
    factory::create_event(db, &other.guild_id).await?;

    let repo = EventRepository::new(db);
    let ids: Vec<i32> = repo
        .get_by_guild_id(guild.guild_id.parse().unwrap())
        .await?
        .into_iter()
        .map(|e| e.id)
        .collect();

    assert_eq!(ids, vec![sooner.id, later.id]);

    Ok(())
}
