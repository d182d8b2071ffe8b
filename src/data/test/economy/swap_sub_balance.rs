use super::*;

/// Tests writing one sub-balance through the version guard.
///
/// Expected: only the targeted balance changes, version bumps
#[tokio::test]
async fn writes_targeted_balance_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EconomyAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_funded_account(db, "100", "42", 500, 200).await?;

    let repo = EconomyRepository::new(db);
    let applied = repo
        .swap_sub_balance("100", "42", 0, SubBalance::Salario, 1500)
        .await?;

    assert!(applied);

    let account = repo.find("100", "42").await?.unwrap();
    assert_eq!(account.salario, 1500);
    assert_eq!(account.debito, 500);
    assert_eq!(account.efectivo, 200);
    assert_eq!(account.version, 1);

    Ok(())
}

/// Tests that the sub-balance swap honors the version guard.
///
/// Expected: false with a stale version
#[tokio::test]
async fn rejects_stale_version() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EconomyAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_funded_account(db, "100", "42", 0, 0).await?;

    let repo = EconomyRepository::new(db);
    assert!(repo
        .swap_sub_balance("100", "42", 0, SubBalance::DineroNegro, 999)
        .await?);

    let applied = repo
        .swap_sub_balance("100", "42", 0, SubBalance::DineroNegro, 1)
        .await?;

    assert!(!applied);

    let account = repo.find("100", "42").await?.unwrap();
    assert_eq!(account.dinero_negro, 999);

    Ok(())
}
