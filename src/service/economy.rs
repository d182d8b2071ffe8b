//! Economy business logic.
//!
//! Purchases debit the checking balance first and take the remainder from
//! cash. Every write is a compare-and-swap on the account's version
//! column with a small bounded retry, so two concurrent purchases can
//! never silently overwrite each other.

use sea_orm::DatabaseConnection;

use crate::{
    data::economy::EconomyRepository,
    error::AppError,
    model::economy::{PurchaseBreakdownDto, SubBalance},
};

pub const MSG_ACCOUNT_NOT_FOUND: &str =
    "No se encontró una cuenta de economía. Contacta con un administrador.";
const MSG_ACCOUNT_EXISTS: &str = "La cuenta de economía ya existe";
const MSG_INVALID_AMOUNT: &str = "El monto debe ser mayor que cero";
const MSG_INSUFFICIENT_FUNDS: &str = "Fondos insuficientes";
const MSG_BALANCE_OVERFLOW: &str = "El depósito excede el saldo máximo de la cuenta";
const MSG_WRITE_CONFLICT: &str = "La cuenta fue modificada por otra operación, inténtalo de nuevo";

/// Attempts before a contended compare-and-swap gives up.
const CAS_ATTEMPTS: u32 = 3;

pub struct EconomyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EconomyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches an account. A missing account is a 404 telling the user to
    /// contact an administrator, never a zero-balance default.
    pub async fn get_account(
        &self,
        guild_id: &str,
        discord_id: &str,
    ) -> Result<entity::economy_account::Model, AppError> {
        EconomyRepository::new(self.db)
            .find(guild_id, discord_id)
            .await?
            .ok_or_else(|| AppError::NotFound(MSG_ACCOUNT_NOT_FOUND.to_string()))
    }

    /// Opens a zeroed account for a user.
    pub async fn open_account(
        &self,
        guild_id: &str,
        discord_id: &str,
    ) -> Result<entity::economy_account::Model, AppError> {
        let repo = EconomyRepository::new(self.db);

        if repo.find(guild_id, discord_id).await?.is_some() {
            return Err(AppError::BadRequest(MSG_ACCOUNT_EXISTS.to_string()));
        }

        Ok(repo.create(guild_id, discord_id).await?)
    }

    /// Debits a purchase: checking first, remainder from cash.
    pub async fn purchase(
        &self,
        guild_id: &str,
        discord_id: &str,
        monto: i64,
    ) -> Result<(entity::economy_account::Model, PurchaseBreakdownDto), AppError> {
        if monto <= 0 {
            return Err(AppError::BadRequest(MSG_INVALID_AMOUNT.to_string()));
        }

        let repo = EconomyRepository::new(self.db);

        for _ in 0..CAS_ATTEMPTS {
            let account = self.get_account(guild_id, discord_id).await?;

            let de_debito = account.debito.min(monto);
            let de_efectivo = monto - de_debito;

            if account.efectivo < de_efectivo {
                return Err(AppError::BadRequest(MSG_INSUFFICIENT_FUNDS.to_string()));
            }

            let applied = repo
                .swap_purchase_balances(
                    guild_id,
                    discord_id,
                    account.version,
                    account.debito - de_debito,
                    account.efectivo - de_efectivo,
                )
                .await?;

            if applied {
                let updated = self.get_account(guild_id, discord_id).await?;
                return Ok((
                    updated,
                    PurchaseBreakdownDto {
                        monto,
                        de_debito,
                        de_efectivo,
                    },
                ));
            }

            tracing::debug!(
                "Purchase CAS conflict for {} in guild {}, retrying",
                discord_id,
                guild_id
            );
        }

        Err(AppError::Conflict(MSG_WRITE_CONFLICT.to_string()))
    }

    /// Credits one sub-balance.
    pub async fn deposit(
        &self,
        guild_id: &str,
        discord_id: &str,
        balance: SubBalance,
        monto: i64,
    ) -> Result<entity::economy_account::Model, AppError> {
        if monto <= 0 {
            return Err(AppError::BadRequest(MSG_INVALID_AMOUNT.to_string()));
        }

        let repo = EconomyRepository::new(self.db);

        for _ in 0..CAS_ATTEMPTS {
            let account = self.get_account(guild_id, discord_id).await?;

            let current = match balance {
                SubBalance::Salario => account.salario,
                SubBalance::Debito => account.debito,
                SubBalance::Gobierno => account.gobierno,
                SubBalance::Empresa => account.empresa,
                SubBalance::Efectivo => account.efectivo,
                SubBalance::DineroNegro => account.dinero_negro,
                SubBalance::Deuda => account.deuda,
                SubBalance::Dolares => account.dolares,
                SubBalance::Euros => account.euros,
            };

            let Some(next) = current.checked_add(monto) else {
                return Err(AppError::BadRequest(MSG_BALANCE_OVERFLOW.to_string()));
            };

            let applied = repo
                .swap_sub_balance(guild_id, discord_id, account.version, balance, next)
                .await?;

            if applied {
                return self.get_account(guild_id, discord_id).await;
            }
        }

        Err(AppError::Conflict(MSG_WRITE_CONFLICT.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_utils::{
        builder::TestBuilder,
        factory::economy::{create_funded_account, EconomyAccountFactory},
    };

    /// A purchase drains checking first and takes the remainder from cash.
    #[tokio::test]
    async fn purchase_splits_checking_then_cash() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::EconomyAccount)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        create_funded_account(db, "100", "42", 100, 50).await.unwrap();

        let (account, breakdown) = EconomyService::new(db)
            .purchase("100", "42", 120)
            .await
            .unwrap();

        assert_eq!(breakdown.de_debito, 100);
        assert_eq!(breakdown.de_efectivo, 20);
        assert_eq!(account.debito, 0);
        assert_eq!(account.efectivo, 30);
        assert_eq!(account.version, 1);
    }

    /// A purchase within checking leaves cash untouched.
    #[tokio::test]
    async fn purchase_within_checking_spares_cash() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::EconomyAccount)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        create_funded_account(db, "100", "42", 100, 50).await.unwrap();

        let (account, breakdown) = EconomyService::new(db)
            .purchase("100", "42", 60)
            .await
            .unwrap();

        assert_eq!(breakdown.de_debito, 60);
        assert_eq!(breakdown.de_efectivo, 0);
        assert_eq!(account.efectivo, 50);
    }

    /// Combined funds short of the amount reject the purchase untouched.
    #[tokio::test]
    async fn purchase_rejects_insufficient_funds() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::EconomyAccount)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        create_funded_account(db, "100", "42", 100, 50).await.unwrap();

        let service = EconomyService::new(db);
        let result = service.purchase("100", "42", 200).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        let account = service.get_account("100", "42").await.unwrap();
        assert_eq!(account.debito, 100);
        assert_eq!(account.efectivo, 50);
        assert_eq!(account.version, 0);
    }

    /// A missing account is a 404 telling the user to contact an admin.
    #[tokio::test]
    async fn missing_account_is_not_found() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::EconomyAccount)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let result = EconomyService::new(db).get_account("100", "42").await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    /// Opening an account twice is rejected.
    #[tokio::test]
    async fn open_account_rejects_duplicate() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::EconomyAccount)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = EconomyService::new(db);
        service.open_account("100", "42").await.unwrap();

        let result = service.open_account("100", "42").await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    /// A deposit credits only the named sub-balance.
    #[tokio::test]
    async fn deposit_credits_named_balance() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::EconomyAccount)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        create_funded_account(db, "100", "42", 100, 50).await.unwrap();

        let account = EconomyService::new(db)
            .deposit("100", "42", SubBalance::Salario, 1500)
            .await
            .unwrap();

        assert_eq!(account.salario, 1500);
        assert_eq!(account.debito, 100);
        assert_eq!(account.version, 1);
    }

    /// A deposit that would push a sub-balance past i64::MAX is rejected
    /// instead of wrapping, leaving the account untouched.
    #[tokio::test]
    async fn deposit_rejects_balance_overflow() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::EconomyAccount)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        EconomyAccountFactory::new(db)
            .guild_id("100")
            .discord_id("42")
            .salario(i64::MAX)
            .build()
            .await
            .unwrap();

        let service = EconomyService::new(db);
        let result = service.deposit("100", "42", SubBalance::Salario, 1).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        let account = service.get_account("100", "42").await.unwrap();
        assert_eq!(account.salario, i64::MAX);
        assert_eq!(account.version, 0);
    }
}
