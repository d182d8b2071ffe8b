use sea_orm::entity::prelude::*;

/// Company or faction creation request.
///
/// Lifecycle: `pendiente` is the only non-terminal state. Approval keeps
/// the row with `estado = "aprobada"` plus reviewer metadata; denial
/// deletes the row after notification data has been extracted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "company_request")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_id: String,
    pub discord_id: String,
    pub nombre: String,
    pub descripcion: String,
    pub tipo: String,
    pub link_discord: String,
    pub estado: String,
    pub revisor_id: Option<String>,
    pub revisor_rol: Option<String>,
    pub justificacion: Option<String>,
    pub created_at: DateTime,
    pub reviewed_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
