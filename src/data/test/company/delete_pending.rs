use super::*;

/// Tests denial: the pending row is deleted and disappears from both
/// the pending queue and the user's own list.
///
/// Expected: delete true, queues empty afterwards
#[tokio::test]
async fn deletes_pending_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CompanyRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CompanyRequestRepository::new(db);
    let request = create_pending_request(db, "100", "42").await?;

    assert!(repo.delete_pending(request.id).await?);
    assert!(repo.list_pending("100").await?.is_empty());
    assert!(repo.list_by_user("100", "42").await?.is_empty());

    Ok(())
}

/// Tests that an already-approved request cannot be deleted through the
/// denial path.
///
/// Expected: false, row still present
#[tokio::test]
async fn refuses_to_delete_reviewed_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CompanyRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CompanyRequestRepository::new(db);
    let request = create_pending_request(db, "100", "42").await?;
    repo.approve(request.id, ESTADO_APROBADA, "7", "Administrador", "OK")
        .await?;

    assert!(!repo.delete_pending(request.id).await?);
    assert!(repo.find_by_id(request.id).await?.is_some());

    Ok(())
}
