use super::*;

/// Tests the dangerous-flag boundary: the flag must flip exactly when
/// the total strictly exceeds five arrests.
///
/// Expected: false at five, true at six
#[tokio::test]
async fn flag_flips_strictly_above_five() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_arrest_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArrestRepository::new(db);
    repo.ensure_record("100", "42").await?;

    for _ in 0..5 {
        repo.increment_total("100", "42").await?;
    }

    let record = repo.find_record("100", "42").await?.unwrap();
    assert_eq!(record.total_arrestos, 5);
    assert!(!record.usuario_peligroso);

    repo.increment_total("100", "42").await?;

    let record = repo.find_record("100", "42").await?.unwrap();
    assert_eq!(record.total_arrestos, 6);
    assert!(record.usuario_peligroso);

    Ok(())
}

/// Tests that a user with no record simply has none; callers render a
/// zeroed view instead of treating this as an error.
///
/// Expected: Ok(None)
#[tokio::test]
async fn missing_record_is_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_arrest_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let record = ArrestRepository::new(db).find_record("100", "42").await?;

    assert!(record.is_none());

    Ok(())
}
