use super::*;

/// Tests that a CSRF state validates exactly once.
///
/// A replayed callback presenting the same state must fail, since the
/// validating statement deleted the row.
///
/// Expected: first consume true, second consume false
#[tokio::test]
async fn state_is_single_use() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::OauthState)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OauthStateRepository::new(db);
    repo.create("csrf-123").await?;

    assert!(repo.consume("csrf-123").await?);
    assert!(!repo.consume("csrf-123").await?);

    Ok(())
}

/// Tests consuming a state that was never handed out.
///
/// Expected: false
#[tokio::test]
async fn unknown_state_is_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::OauthState)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!OauthStateRepository::new(db).consume("forged").await?);

    Ok(())
}

/// Tests that an expired state is rejected even though its row exists.
///
/// Expected: false for a row whose expiry is in the past
#[tokio::test]
async fn expired_state_is_rejected() -> Result<(), DbErr> {
    use chrono::{Duration, Utc};
    use sea_orm::{ActiveModelTrait, ActiveValue};

    let test = TestBuilder::new()
        .with_table(entity::prelude::OauthState)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let past = Utc::now().naive_utc() - Duration::minutes(1);
    entity::oauth_state::ActiveModel {
        state: ActiveValue::Set("stale".to_string()),
        created_at: ActiveValue::Set(past - Duration::minutes(10)),
        expires_at: ActiveValue::Set(past),
        ..Default::default()
    }
    .insert(db)
    .await?;

    assert!(!OauthStateRepository::new(db).consume("stale").await?);

    Ok(())
}
