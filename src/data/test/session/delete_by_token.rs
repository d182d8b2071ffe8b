use super::*;

/// Tests that logout deletes the token row exactly once.
///
/// Expected: first delete true, second delete false, token gone
#[tokio::test]
async fn deletes_token_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Session)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now().naive_utc();
    let repo = SessionRepository::new(db);
    repo.create("42", "tok-abc", now, now + Duration::hours(24))
        .await?;

    assert!(repo.delete_by_token("tok-abc").await?);
    assert!(!repo.delete_by_token("tok-abc").await?);
    assert!(repo.find_by_token("tok-abc").await?.is_none());

    Ok(())
}
