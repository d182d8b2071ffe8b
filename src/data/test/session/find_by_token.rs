use super::*;

/// Tests finding a stored session by its opaque token.
///
/// Expected: Ok(Some) with the session row for the issuing user
#[tokio::test]
async fn finds_stored_session() -> Result<(), DbErr> {
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

    let found = repo.find_by_token("tok-abc").await?;

    assert_eq!(found.map(|s| s.discord_id), Some("42".to_string()));

    Ok(())
}

/// Tests looking up a token that was never issued.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Session)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = SessionRepository::new(db).find_by_token("nope").await?;

    assert!(found.is_none());

    Ok(())
}
