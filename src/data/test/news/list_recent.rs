use super::*;

fn post_param(guild_id: &str, titulo: &str) -> PublishNewsParam {
    PublishNewsParam {
        guild_id: guild_id.to_string(),
        autor_id: "7".to_string(),
        titulo: titulo.to_string(),
        contenido: "Contenido de la noticia".to_string(),
        imagen: None,
    }
}

/// Tests that recent posts come back newest first and honor the limit.
///
/// Expected: latest post first, older ones cut off
#[tokio::test]
async fn newest_first_with_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::NewsPost)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NewsRepository::new(db);
    for titulo in ["primera", "segunda", "tercera"] {
        repo.create(post_param("100", titulo)).await?;
    }

    let posts = repo.list_recent("100", 2).await?;

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].titulo, "tercera");
    assert_eq!(posts[1].titulo, "segunda");

    Ok(())
}

/// Tests that posts are scoped per guild.
///
/// Expected: no posts for a guild that never published
#[tokio::test]
async fn scoped_per_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::NewsPost)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NewsRepository::new(db);
    repo.create(post_param("100", "solo aquí")).await?;

    assert!(repo.list_recent("200", 10).await?.is_empty());

    Ok(())
}
