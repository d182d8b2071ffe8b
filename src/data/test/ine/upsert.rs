use super::*;

/// Tests creating a fresh document.
///
/// Expected: unapproved document with no issued-card URL
#[tokio::test]
async fn creates_unapproved_document() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::IdentityDocument)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let document = IdentityRepository::new(db)
        .upsert(document_param("100", "42", "Juan"))
        .await?;

    assert_eq!(document.nombre, "Juan");
    assert!(!document.aprobado);
    assert!(document.documento_url.is_none());

    Ok(())
}

/// Tests that editing an approved document revokes the approval and the
/// issued card, forcing a fresh review.
///
/// Expected: edit keeps one row but clears aprobado and documento_url
#[tokio::test]
async fn edit_resets_approval() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::IdentityDocument)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = IdentityRepository::new(db);
    repo.upsert(document_param("100", "42", "Juan")).await?;
    repo.approve("100", "42").await?;
    repo.set_document_url("100", "42", "https://cdn.example/ine/42.png")
        .await?;

    let edited = repo.upsert(document_param("100", "42", "Juan Alberto")).await?;

    assert_eq!(edited.nombre, "Juan Alberto");
    assert!(!edited.aprobado);
    assert!(edited.documento_url.is_none());

    Ok(())
}
