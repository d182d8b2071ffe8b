use super::*;

/// Tests appending notes and warnings to a profile.
///
/// Notes and warnings are independent collections; adding to one must
/// not show up in the other.
///
/// Expected: one note and one warning, each in its own list
#[tokio::test]
async fn notes_and_warnings_are_separate() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_staff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StaffRepository::new(db);
    repo.ensure_profile("100", "42").await?;

    repo.add_note(AddStaffEntryParam {
        guild_id: "100".to_string(),
        discord_id: "42".to_string(),
        contenido: "Buen trabajo en el evento".to_string(),
        staff_id: "1".to_string(),
    })
    .await?;

    repo.add_warning(AddStaffEntryParam {
        guild_id: "100".to_string(),
        discord_id: "42".to_string(),
        contenido: "Llegó tarde a su turno".to_string(),
        staff_id: "1".to_string(),
    })
    .await?;

    let notes = repo.get_notes("100", "42").await?;
    let warnings = repo.get_warnings("100", "42").await?;

    assert_eq!(notes.len(), 1);
    assert_eq!(warnings.len(), 1);
    assert_eq!(notes[0].contenido, "Buen trabajo en el evento");
    assert_eq!(warnings[0].contenido, "Llegó tarde a su turno");

    Ok(())
}

/// Tests that entries come back in insertion order.
///
/// Expected: oldest note first
#[tokio::test]
async fn notes_ordered_by_creation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_staff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StaffRepository::new(db);
    repo.ensure_profile("100", "42").await?;

    for contenido in ["primera", "segunda", "tercera"] {
        repo.add_note(AddStaffEntryParam {
            guild_id: "100".to_string(),
            discord_id: "42".to_string(),
            contenido: contenido.to_string(),
            staff_id: "1".to_string(),
        })
        .await?;
    }

    let notes = repo.get_notes("100", "42").await?;

    assert_eq!(notes.len(), 3);
    assert_eq!(notes[0].contenido, "primera");
    assert_eq!(notes[2].contenido, "tercera");

    Ok(())
}
