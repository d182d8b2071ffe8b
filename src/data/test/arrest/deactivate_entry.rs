use super::*;

/// Tests marking an arrest entry as served.
///
/// Serving must clear `activo` on that entry only and leave the historic
/// total untouched.
///
/// Expected: entry inactive, total unchanged, second serve refused
#[tokio::test]
async fn serves_active_entry_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_arrest_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArrestRepository::new(db);
    repo.ensure_record("100", "42").await?;
    let entry = repo
        .insert_entry(NewArrestParam {
            guild_id: "100".to_string(),
            discord_id: "42".to_string(),
            motivo: "Robo a mano armada".to_string(),
            oficial_id: "7".to_string(),
            duracion_minutos: 60,
        })
        .await?;
    repo.increment_total("100", "42").await?;

    assert!(repo.deactivate_entry("100", "42", entry.id).await?);
    assert!(!repo.deactivate_entry("100", "42", entry.id).await?);

    let entries = repo.get_entries("100", "42").await?;
    assert!(!entries[0].activo);

    let record = repo.find_record("100", "42").await?.unwrap();
    assert_eq!(record.total_arrestos, 1);

    Ok(())
}

/// Tests that an entry cannot be served through another user's record.
///
/// Expected: false when the user filter does not match
#[tokio::test]
async fn scoped_to_the_record_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_arrest_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArrestRepository::new(db);
    repo.ensure_record("100", "42").await?;
    let entry = repo
        .insert_entry(NewArrestParam {
            guild_id: "100".to_string(),
            discord_id: "42".to_string(),
            motivo: "Exceso de velocidad".to_string(),
            oficial_id: "7".to_string(),
            duracion_minutos: 15,
        })
        .await?;

    assert!(!repo.deactivate_entry("100", "otro", entry.id).await?);

    Ok(())
}
