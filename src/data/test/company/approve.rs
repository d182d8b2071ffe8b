use super::*;

/// Tests the conditional approval transition.
///
/// Expected: pending request approved with reviewer metadata recorded
#[tokio::test]
async fn approves_pending_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CompanyRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CompanyRequestRepository::new(db);
    let request = repo.create(request_param("100", "42")).await?;

    let approved = repo
        .approve(request.id, ESTADO_APROBADA, "7", "Moderador", "Todo en orden")
        .await?;

    assert!(approved);

    let stored = repo.find_by_id(request.id).await?.unwrap();
    assert_eq!(stored.estado, ESTADO_APROBADA);
    assert_eq!(stored.revisor_id.as_deref(), Some("7"));
    assert_eq!(stored.revisor_rol.as_deref(), Some("Moderador"));
    assert_eq!(stored.justificacion.as_deref(), Some("Todo en orden"));
    assert!(stored.reviewed_at.is_some());

    Ok(())
}

/// Tests that two reviewers racing on the same request cannot both win:
/// the second conditional update matches zero rows.
///
/// Expected: second approval reports false, first reviewer stands
#[tokio::test]
async fn second_reviewer_loses_the_race() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CompanyRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CompanyRequestRepository::new(db);
    let request = create_pending_request(db, "100", "42").await?;

    assert!(
        repo.approve(request.id, ESTADO_APROBADA, "7", "Moderador", "Primera revisión")
            .await?
    );
    assert!(
        !repo
            .approve(request.id, ESTADO_APROBADA, "8", "Soporte", "Segunda revisión")
            .await?
    );

    let stored = repo.find_by_id(request.id).await?.unwrap();
    assert_eq!(stored.revisor_id.as_deref(), Some("7"));

    Ok(())
}
