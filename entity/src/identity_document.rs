use sea_orm::entity::prelude::*;

/// INE or passport identity document for one user in one guild.
///
/// Editing personal fields resets `aprobado`; the card URL is only
/// populated once an approved document has been emitted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "identity_document")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub discord_id: String,
    pub tipo: String,
    pub nombre: String,
    pub apellidos: String,
    pub fecha_nacimiento: String,
    pub nacionalidad: String,
    pub sexo: String,
    pub aprobado: bool,
    pub documento_url: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
