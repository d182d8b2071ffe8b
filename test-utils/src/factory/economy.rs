//! Economy-account factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating economy accounts with customizable balances.
///
/// Balances default to zero and `version` to 0, matching a freshly
/// opened account.
pub struct EconomyAccountFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    discord_id: String,
    salario: i64,
    debito: i64,
    gobierno: i64,
    empresa: i64,
    efectivo: i64,
    dinero_negro: i64,
    deuda: i64,
    dolares: i64,
    euros: i64,
    version: i32,
}

impl<'a> EconomyAccountFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: "100".to_string(),
            discord_id: id.to_string(),
            salario: 0,
            debito: 0,
            gobierno: 0,
            empresa: 0,
            efectivo: 0,
            dinero_negro: 0,
            deuda: 0,
            dolares: 0,
            euros: 0,
            version: 0,
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn discord_id(mut self, discord_id: impl Into<String>) -> Self {
        self.discord_id = discord_id.into();
        self
    }

    pub fn debito(mut self, debito: i64) -> Self {
        self.debito = debito;
        self
    }

    pub fn efectivo(mut self, efectivo: i64) -> Self {
        self.efectivo = efectivo;
        self
    }

    pub fn salario(mut self, salario: i64) -> Self {
        self.salario = salario;
        self
    }

    pub fn dinero_negro(mut self, dinero_negro: i64) -> Self {
        self.dinero_negro = dinero_negro;
        self
    }

    pub fn version(mut self, version: i32) -> Self {
        self.version = version;
        self
    }

    pub async fn build(self) -> Result<entity::economy_account::Model, DbErr> {
        entity::economy_account::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            discord_id: ActiveValue::Set(self.discord_id),
            salario: ActiveValue::Set(self.salario),
            debito: ActiveValue::Set(self.debito),
            gobierno: ActiveValue::Set(self.gobierno),
            empresa: ActiveValue::Set(self.empresa),
            efectivo: ActiveValue::Set(self.efectivo),
            dinero_negro: ActiveValue::Set(self.dinero_negro),
            deuda: ActiveValue::Set(self.deuda),
            dolares: ActiveValue::Set(self.dolares),
            euros: ActiveValue::Set(self.euros),
            version: ActiveValue::Set(self.version),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an account with funded checking and cash balances.
pub async fn create_funded_account(
    db: &DatabaseConnection,
    guild_id: &str,
    discord_id: &str,
    debito: i64,
    efectivo: i64,
) -> Result<entity::economy_account::Model, DbErr> {
    EconomyAccountFactory::new(db)
        .guild_id(guild_id)
        .discord_id(discord_id)
        .debito(debito)
        .efectivo(efectivo)
        .build()
        .await
}
