use super::*;

/// Tests sweeping expired token rows.
///
/// Expected: the expired row is removed, the live one survives
#[tokio::test]
async fn removes_only_expired_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Session)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now().naive_utc();
    let repo = SessionRepository::new(db);
    repo.create("42", "tok-live", now, now + Duration::hours(24))
        .await?;
    repo.create("42", "tok-dead", now - Duration::hours(48), now - Duration::hours(24))
        .await?;

    let purged = repo.purge_expired().await?;

    assert_eq!(purged, 1);
    assert!(repo.find_by_token("tok-dead").await?.is_none());
    assert!(repo.find_by_token("tok-live").await?.is_some());

    Ok(())
}

/// Tests the sweep with nothing to remove.
///
/// Expected: zero rows purged
#[tokio::test]
async fn no_expired_rows_is_a_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Session)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now().naive_utc();
    let repo = SessionRepository::new(db);
    repo.create("42", "tok-live", now, now + Duration::hours(24))
        .await?;

    assert_eq!(repo.purge_expired().await?, 0);

    Ok(())
}
