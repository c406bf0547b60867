use super::*;

#[tokio::test]
async fn deletes_event_of_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let stored = factory::create_event(db, &guild.guild_id).await?;

    let service = EventService::new(db);
    service
        .delete(guild.guild_id.parse().unwrap(), stored.id)
        .await?;

    assert!(matches!(
        service.get_by_id(stored.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
