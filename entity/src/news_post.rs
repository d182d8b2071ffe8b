use sea_orm::entity::prelude::*;

/// Published news post; the row is the archive, delivery to the Discord
/// webhook happens after commit.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "news_post")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_id: String,
    pub autor_id: String,
    pub titulo: String,
    pub contenido: String,
    pub imagen: Option<String>,
    pub published_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
