use super::*;

/// Tests that the issued-card URL can only land on an approved document.
///
/// Expected: false before approval, true after
#[tokio::test]
async fn requires_approval() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::IdentityDocument)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = IdentityRepository::new(db);
    repo.upsert(document_param("100", "42", "Juan")).await?;

    assert!(
        !repo
            .set_document_url("100", "42", "https://cdn.example/ine/42.png")
            .await?
    );

    repo.approve("100", "42").await?;

    assert!(
        repo.set_document_url("100", "42", "https://cdn.example/ine/42.png")
            .await?
    );

    let document = repo.find("100", "42").await?.unwrap();
    assert_eq!(
        document.documento_url.as_deref(),
        Some("https://cdn.example/ine/42.png")
    );

    Ok(())
}
