use super::*;

/// Tests renaming a faculty.
///
/// Verifies that the update is returned and persisted.
///
/// Expected: Ok with the new name, visible on a subsequent read
#[tokio::test]
async fn updates_name() -> TestResult {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_faculty(db).await?;
    let repo = FacultyRepository::new(db);

    let updated = repo
        .update(Faculty {
            id: stored.id,
            name: "Renamed".to_string(),
        })
        .await?;
    let reloaded = repo.find_by_id(stored.id).await?;

    assert_eq!(updated.name, "Renamed");
    assert_eq!(reloaded, updated);

    Ok(())
}

/// Tests updating a faculty that does not exist.
///
/// Expected: Err(DataError::NotFound)
#[tokio::test]
async fn returns_not_found_for_missing_id() -> TestResult {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = FacultyRepository::new(db)
        .update(Faculty {
            id: 7,
            name: "Ghost".to_string(),
        })
        .await;

    assert!(matches!(result, Err(DataError::NotFound { id: 7, .. })));

    Ok(())
}
