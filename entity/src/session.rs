use sea_orm::entity::prelude::*;

/// Opaque bearer session token issued at Discord-OAuth time.
///
/// `issued_at` drives the maximum renewal window for the refresh
/// endpoint; `expires_at` drives per-request validation.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "session")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub token: String,
    pub discord_id: String,
    pub issued_at: DateTime,
    pub expires_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
