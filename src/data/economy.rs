//! Economy-account repository.
//!
//! Balance mutations go through a compare-and-swap on the `version`
//! column: the caller reads the account, computes the new balances, and
//! writes them back guarded by the version it read. A zero row count
//! means another writer got there first and the caller must re-read.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::model::economy::SubBalance;

pub struct EconomyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EconomyRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find(
        &self,
        guild_id: &str,
        discord_id: &str,
    ) -> Result<Option<entity::economy_account::Model>, DbErr> {
        entity::prelude::EconomyAccount::find_by_id((
            guild_id.to_string(),
            discord_id.to_string(),
        ))
        .one(self.db)
        .await
    }

    /// Creates a zeroed account for a user.
    ///
    /// # Returns
    /// - `Ok(Model)` - The new account
    /// - `Err(DbErr)` - Database error, including unique violation when
    ///   the account already exists (callers check existence first)
    pub async fn create(
        &self,
        guild_id: &str,
        discord_id: &str,
    ) -> Result<entity::economy_account::Model, DbErr> {
        entity::prelude::EconomyAccount::insert(entity::economy_account::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            discord_id: ActiveValue::Set(discord_id.to_string()),
            salario: ActiveValue::Set(0),
            debito: ActiveValue::Set(0),
            gobierno: ActiveValue::Set(0),
            empresa: ActiveValue::Set(0),
            efectivo: ActiveValue::Set(0),
            dinero_negro: ActiveValue::Set(0),
            deuda: ActiveValue::Set(0),
            dolares: ActiveValue::Set(0),
            euros: ActiveValue::Set(0),
            version: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        })
        .exec_with_returning(self.db)
        .await
    }

    /// Writes new checking and cash balances, guarded by the version the
    /// caller read.
    ///
    /// # Returns
    /// - `Ok(true)` - Swap applied
    /// - `Ok(false)` - Version moved underneath the caller; re-read and retry
    pub async fn swap_purchase_balances(
        &self,
        guild_id: &str,
        discord_id: &str,
        expected_version: i32,
        debito: i64,
        efectivo: i64,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::EconomyAccount::update_many()
            .filter(entity::economy_account::Column::GuildId.eq(guild_id))
            .filter(entity::economy_account::Column::DiscordId.eq(discord_id))
            .filter(entity::economy_account::Column::Version.eq(expected_version))
            .col_expr(entity::economy_account::Column::Debito, Expr::value(debito))
            .col_expr(
                entity::economy_account::Column::Efectivo,
                Expr::value(efectivo),
            )
            .col_expr(
                entity::economy_account::Column::Version,
                Expr::value(expected_version + 1),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Writes a new value for one sub-balance, guarded by the version the
    /// caller read.
    pub async fn swap_sub_balance(
        &self,
        guild_id: &str,
        discord_id: &str,
        expected_version: i32,
        balance: SubBalance,
        value: i64,
    ) -> Result<bool, DbErr> {
        let column = match balance {
            SubBalance::Salario => entity::economy_account::Column::Salario,
            SubBalance::Debito => entity::economy_account::Column::Debito,
            SubBalance::Gobierno => entity::economy_account::Column::Gobierno,
            SubBalance::Empresa => entity::economy_account::Column::Empresa,
            SubBalance::Efectivo => entity::economy_account::Column::Efectivo,
            SubBalance::DineroNegro => entity::economy_account::Column::DineroNegro,
            SubBalance::Deuda => entity::economy_account::Column::Deuda,
            SubBalance::Dolares => entity::economy_account::Column::Dolares,
            SubBalance::Euros => entity::economy_account::Column::Euros,
        };

        let result = entity::prelude::EconomyAccount::update_many()
            .filter(entity::economy_account::Column::GuildId.eq(guild_id))
            .filter(entity::economy_account::Column::DiscordId.eq(discord_id))
            .filter(entity::economy_account::Column::Version.eq(expected_version))
            .col_expr(column, Expr::value(value))
            .col_expr(
                entity::economy_account::Column::Version,
                Expr::value(expected_version + 1),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
