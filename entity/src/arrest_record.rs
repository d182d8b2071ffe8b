use sea_orm::entity::prelude::*;

/// Aggregate arrest counters for one user in one guild.
///
/// `total_arrestos` is maintained with atomic increments alongside
/// `arrest_entry` inserts; `usuario_peligroso` is derived from it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "arrest_record")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub discord_id: String,
    pub total_arrestos: i32,
    pub usuario_peligroso: bool,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
