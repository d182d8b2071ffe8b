use super::*;

/// Tests a purchase swap with the version the caller just read.
///
/// Expected: swap applies, balances written, version bumped
#[tokio::test]
async fn applies_with_matching_version() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EconomyAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_funded_account(db, "100", "42", 500, 200).await?;

    let repo = EconomyRepository::new(db);
    let applied = repo.swap_purchase_balances("100", "42", 0, 350, 150).await?;

    assert!(applied);

    let account = repo.find("100", "42").await?.unwrap();
    assert_eq!(account.debito, 350);
    assert_eq!(account.efectivo, 150);
    assert_eq!(account.version, 1);

    Ok(())
}

/// Tests that a stale version is refused, simulating a concurrent writer
/// that committed first.
///
/// Expected: swap reports false and balances stay untouched
#[tokio::test]
async fn rejects_stale_version() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EconomyAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_funded_account(db, "100", "42", 500, 200).await?;

    let repo = EconomyRepository::new(db);
    // Another writer wins the race.
    assert!(repo.swap_purchase_balances("100", "42", 0, 400, 200).await?);

    // The loser still holds version 0.
    let applied = repo.swap_purchase_balances("100", "42", 0, 100, 0).await?;

    assert!(!applied);

    let account = repo.find("100", "42").await?.unwrap();
    assert_eq!(account.debito, 400);
    assert_eq!(account.version, 1);

    Ok(())
}
