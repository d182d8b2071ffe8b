use sea_orm::entity::prelude::*;

/// Single arrest in a user's record.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "arrest_entry")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_id: String,
    pub discord_id: String,
    pub motivo: String,
    pub oficial_id: String,
    pub duracion_minutos: i32,
    pub activo: bool,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
