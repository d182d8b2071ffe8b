use super::*;

/// Tests inserting a fresh named-role mapping.
///
/// Expected: one mapping retrievable for the guild
#[tokio::test]
async fn inserts_new_mapping() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RoleConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoleConfigRepository::new(db);
    repo.upsert("100", "Administrador", "555").await?;

    let mappings = repo.get_mappings("100").await?;

    assert_eq!(mappings.len(), 1);
    assert_eq!(mappings[0].role_name, "Administrador");
    assert_eq!(mappings[0].discord_role_id, "555");

    Ok(())
}

/// Tests that re-mapping a named role replaces the Discord role id in
/// place instead of adding a second row.
///
/// Expected: still one mapping, carrying the new role id
#[tokio::test]
async fn replaces_existing_mapping() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RoleConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoleConfigRepository::new(db);
    repo.upsert("100", "Policia", "555").await?;
    repo.upsert("100", "Policia", "777").await?;

    let mappings = repo.get_mappings("100").await?;

    assert_eq!(mappings.len(), 1);
    assert_eq!(mappings[0].discord_role_id, "777");

    Ok(())
}

/// Tests that mappings are scoped per guild.
///
/// Expected: a guild without configuration yields no mappings
#[tokio::test]
async fn mappings_are_per_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RoleConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoleConfigRepository::new(db);
    repo.upsert("100", "Moderador", "555").await?;

    assert!(repo.get_mappings("200").await?.is_empty());

    Ok(())
}
