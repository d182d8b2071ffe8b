use sea_orm::entity::prelude::*;

/// Per-guild, per-user economy account.
///
/// Four sub-balances plus cash, black money, debt, and two foreign
/// currencies. `version` is the optimistic-concurrency token; every
/// balance mutation must bump it through a compare-and-swap.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "economy_account")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub discord_id: String,
    pub salario: i64,
    pub debito: i64,
    pub gobierno: i64,
    pub empresa: i64,
    pub efectivo: i64,
    pub dinero_negro: i64,
    pub deuda: i64,
    pub dolares: i64,
    pub euros: i64,
    pub version: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
