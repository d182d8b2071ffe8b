use super::*;

/// Tests that worked minutes accumulate through in-place increments.
///
/// Expected: two additions sum on the same row
#[tokio::test]
async fn accumulates_minutes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_staff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StaffRepository::new(db);
    repo.ensure_profile("100", "42").await?;
    repo.add_minutes("100", "42", 90).await?;
    repo.add_minutes("100", "42", 30).await?;

    let profile = repo.find_profile("100", "42").await?.unwrap();
    assert_eq!(profile.minutos_trabajados, 120);

    Ok(())
}

/// Tests that creating the profile twice is a no-op, so counters are
/// never reset by a concurrent first-use race.
///
/// Expected: counters survive a second ensure_profile call
#[tokio::test]
async fn ensure_profile_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_staff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StaffRepository::new(db);
    repo.ensure_profile("100", "42").await?;
    repo.add_minutes("100", "42", 60).await?;
    repo.ensure_profile("100", "42").await?;

    let profile = repo.find_profile("100", "42").await?.unwrap();
    assert_eq!(profile.minutos_trabajados, 60);

    Ok(())
}
