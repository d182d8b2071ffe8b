use super::*;

/// Tests finding an existing user by Discord ID.
///
/// Expected: Ok(Some) with the stored user
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = test_utils::factory::user::create_user_with_id(db, "42").await?;

    let found = UserRepository::new(db).find_by_discord_id("42").await?;

    assert_eq!(found.map(|u| u.name), Some(created.name));

    Ok(())
}

/// Tests looking up a Discord ID that was never stored.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = UserRepository::new(db).find_by_discord_id("missing").await?;

    assert!(found.is_none());

    Ok(())
}
