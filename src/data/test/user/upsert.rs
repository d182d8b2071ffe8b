use super::*;

/// Tests creating a new user at login time.
///
/// Expected: Ok with the user stored under their Discord ID
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            discord_id: "123456789".to_string(),
            name: "TestUser".to_string(),
            avatar_hash: Some("a1b2c3".to_string()),
        })
        .await?;

    assert_eq!(user.discord_id, "123456789");
    assert_eq!(user.name, "TestUser");
    assert_eq!(user.avatar_hash.as_deref(), Some("a1b2c3"));

    Ok(())
}

/// Tests that a repeat login refreshes the name and avatar in place.
///
/// Expected: Ok with the updated profile, still one row
#[tokio::test]
async fn refreshes_existing_user_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    repo.upsert(UpsertUserParam {
        discord_id: "123456789".to_string(),
        name: "OriginalName".to_string(),
        avatar_hash: None,
    })
    .await?;

    let user = repo
        .upsert(UpsertUserParam {
            discord_id: "123456789".to_string(),
            name: "UpdatedName".to_string(),
            avatar_hash: Some("newhash".to_string()),
        })
        .await?;

    assert_eq!(user.name, "UpdatedName");
    assert_eq!(user.avatar_hash.as_deref(), Some("newhash"));

    Ok(())
}
