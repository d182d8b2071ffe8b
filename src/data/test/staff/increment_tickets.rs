use super::*;

/// Tests the handled-ticket counter increment.
///
/// Expected: counter reflects the number of increments
#[tokio::test]
async fn increments_ticket_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_staff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StaffRepository::new(db);
    repo.ensure_profile("100", "42").await?;
    repo.increment_tickets("100", "42").await?;
    repo.increment_tickets("100", "42").await?;
    repo.increment_tickets("100", "42").await?;

    let profile = repo.find_profile("100", "42").await?.unwrap();
    assert_eq!(profile.tickets, 3);

    Ok(())
}
