use sea_orm::entity::prelude::*;

/// A single dated occurrence of a guild event.
///
/// `date` is always the UTC instant; `timezone_name` is the IANA zone the event was
/// authored in. `parent_id` points at the occurrence this one was generated from and
/// is unique so a parent never has two generated children. `origin_id` points at the
/// originally authored event of the series and `origin_date` copies that event's date,
/// so the series keeps its generation window after the authored event is deleted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_id: String,
    #[sea_orm(unique)]
    pub parent_id: Option<i32>,
    pub origin_id: Option<i32>,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub date: DateTimeUtc,
    pub origin_date: DateTimeUtc,
    pub timezone_name: String,
    pub repetition: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::guild::Entity",
        from = "Column::GuildId",
        to = "super::guild::Column::GuildId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Guild,
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::ParentId",
        to = "Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Parent,
}

impl Related<super::guild::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Guild.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
