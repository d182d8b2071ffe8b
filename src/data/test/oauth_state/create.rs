use super::*;

/// Tests that handing out a new state sweeps abandoned expired rows.
///
/// Only completed callbacks consume their row, so creation is where the
/// leftovers get cleaned up.
///
/// Expected: the expired row is gone, the new state validates
#[tokio::test]
async fn create_sweeps_expired_states() -> Result<(), DbErr> {
    use chrono::{Duration, Utc};
    use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait};

    let test = TestBuilder::new()
        .with_table(entity::prelude::OauthState)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let past = Utc::now().naive_utc() - Duration::minutes(1);
    entity::oauth_state::ActiveModel {
        state: ActiveValue::Set("abandoned".to_string()),
        created_at: ActiveValue::Set(past - Duration::minutes(10)),
        expires_at: ActiveValue::Set(past),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let repo = OauthStateRepository::new(db);
    repo.create("csrf-fresh").await?;

    let remaining = entity::prelude::OauthState::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].state, "csrf-fresh");

    assert!(repo.consume("csrf-fresh").await?);

    Ok(())
}
