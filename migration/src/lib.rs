pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_user_table;
mod m20260105_000002_create_guild_table;
mod m20260105_000003_create_event_table;
mod m20260112_000004_create_event_guild_date_index;
mod m20260119_000005_add_origin_date_to_event;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_guild_table::Migration),
            Box::new(m20260105_000003_create_event_table::Migration),
            Box::new(m20260112_000004_create_event_guild_date_index::Migration),
            Box::new(m20260119_000005_add_origin_date_to_event::Migration),
        ]
    }
}
