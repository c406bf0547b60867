use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000003_create_event_table::Event;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite only accepts a constant default when adding a column.
        manager
            .alter_table(
                Table::alter()
                    .table(Event::Table)
                    .add_column(
                        timestamp_with_time_zone(Event::OriginDate)
                            .default("1970-01-01 00:00:00+00:00"),
                    )
                    .to_owned(),
            )
            .await?;

        // Existing series take the date of their authored event, or their own date
        // when that event is gone.
        manager
            .get_connection()
            .execute_unprepared(
                "UPDATE event SET origin_date = COALESCE(\
                    (SELECT origin.date FROM event AS origin WHERE origin.id = event.origin_id), \
                    event.date)",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Event::Table)
                    .drop_column(Event::OriginDate)
                    .to_owned(),
            )
            .await
    }
}
