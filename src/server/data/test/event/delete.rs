use super::*;

/// Tests that deleting a parent keeps its generated child.
///
/// Expected: Ok(true) and the child's `parent_id` cleared
#[tokio::test]
async fn deletes_event_and_detaches_children() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let parent = factory::create_event(db, &guild.guild_id).await?;
    let child = factory::event::EventFactory::new(db, &guild.guild_id)
        .parent_id(Some(parent.id))
        .build()
        .await?;

    let repo = EventRepository::new(db);

    assert!(repo.delete(parent.id).await?);
    assert!(repo.find_by_id(parent.id).await?.is_none());
    assert_eq!(repo.find_by_id(child.id).await?.unwrap().parent_id, None);

    Ok(())
}

#[tokio::test]
async fn reports_missing_event() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);

    assert!(!repo.delete(12345).await?);

    Ok(())
}
