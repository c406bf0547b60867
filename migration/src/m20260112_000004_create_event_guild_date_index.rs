use sea_orm_migration::prelude::*;

use super::m20260105_000003_create_event_table::Event;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_event_guild_id_date")
                    .table(Event::Table)
                    .col(Event::GuildId)
                    .col(Event::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_event_guild_id_date")
                    .table(Event::Table)
                    .to_owned(),
            )
            .await
    }
}
