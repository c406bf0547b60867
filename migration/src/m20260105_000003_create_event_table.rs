use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000002_create_guild_table::Guild;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(string(Event::GuildId))
                    .col(integer_null(Event::ParentId).unique_key())
                    .col(integer_null(Event::OriginId))
                    .col(string(Event::Title))
                    .col(text(Event::Description).default(""))
                    .col(timestamp_with_time_zone(Event::Date))
                    .col(string(Event::TimezoneName).default("UTC"))
                    .col(string(Event::Repetition).default("NOT_REPEATED"))
                    .col(
                        timestamp_with_time_zone(Event::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Event::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_guild_id")
                            .from(Event::Table, Event::GuildId)
                            .to(Guild::Table, Guild::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_parent_id")
                            .from(Event::Table, Event::ParentId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    GuildId,
    ParentId,
    OriginId,
    Title,
    Description,
    Date,
    OriginDate,
    TimezoneName,
    Repetition,
    CreatedAt,
    UpdatedAt,
}
