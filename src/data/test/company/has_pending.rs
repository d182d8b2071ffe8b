use super::*;

/// Tests the one-pending-request-per-user rule's existence check.
///
/// Expected: true only while a pending row exists for that user+guild
#[tokio::test]
async fn detects_pending_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CompanyRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CompanyRequestRepository::new(db);

    assert!(!repo.has_pending("100", "42").await?);

    repo.create(request_param("100", "42")).await?;

    assert!(repo.has_pending("100", "42").await?);
    // A different guild is unaffected.
    assert!(!repo.has_pending("200", "42").await?);

    Ok(())
}

/// Tests that an approved request no longer counts as pending, so the
/// user may submit again.
///
/// Expected: false after approval
#[tokio::test]
async fn approved_request_is_not_pending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CompanyRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CompanyRequestRepository::new(db);
    let request = repo.create(request_param("100", "42")).await?;

    repo.approve(request.id, ESTADO_APROBADA, "1", "Administrador", "Cumple requisitos")
        .await?;

    assert!(!repo.has_pending("100", "42").await?);

    Ok(())
}
