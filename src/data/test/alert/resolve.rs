use super::*;

/// Tests the full alert lifecycle: raised alerts are listed as active
/// and drop out once resolved.
///
/// Expected: resolve true once, alert gone from the active list
#[tokio::test]
async fn resolved_alert_leaves_active_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ServerAlert)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AlertRepository::new(db);
    let alert = repo
        .create(CreateAlertParam {
            guild_id: "100".to_string(),
            mensaje: "Mantenimiento a las 22:00".to_string(),
            nivel: "aviso".to_string(),
        })
        .await?;

    assert_eq!(repo.list_active("100").await?.len(), 1);

    assert!(repo.resolve("100", alert.id).await?);
    assert!(!repo.resolve("100", alert.id).await?);
    assert!(repo.list_active("100").await?.is_empty());

    Ok(())
}

/// Tests that an alert cannot be resolved through another guild's id.
///
/// Expected: false when the guild filter does not match
#[tokio::test]
async fn scoped_to_its_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ServerAlert)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AlertRepository::new(db);
    let alert = repo
        .create(CreateAlertParam {
            guild_id: "100".to_string(),
            mensaje: "Evento especial".to_string(),
            nivel: "info".to_string(),
        })
        .await?;

    assert!(!repo.resolve("200", alert.id).await?);
    assert_eq!(repo.list_active("100").await?.len(), 1);

    Ok(())
}
