use super::*;

/// Tests deleting an existing faculty.
///
/// Expected: Ok, and the faculty can no longer be found
#[tokio::test]
async fn deletes_faculty() -> TestResult {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_faculty(db).await?;
    let repo = FacultyRepository::new(db);

    repo.delete(stored.id).await?;

    assert!(matches!(
        repo.find_by_id(stored.id).await,
        Err(DataError::NotFound { .. })
    ));

    Ok(())
}

/// Tests deleting a faculty id that was never stored.
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

    let result = FacultyRepository::new(db).delete(3).await;

    assert!(matches!(result, Err(DataError::NotFound { id: 3, .. })));

    Ok(())
}

/// Tests deleting a faculty that still has groups.
///
/// Groups restrict deletion of their faculty, so the store rejects the delete.
///
/// Expected: Err(DataError::Storage) and the faculty is kept
#[tokio::test]
async fn rejects_faculty_with_groups() -> TestResult {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (faculty, _group) = factory::helpers::create_group_with_faculty(db).await?;
    let repo = FacultyRepository::new(db);

    let result = repo.delete(faculty.id).await;

    assert!(matches!(
        result,
        Err(DataError::Storage {
            operation: "delete",
            ..
        })
    ));
    assert!(repo.find_by_id(faculty.id).await.is_ok());

    Ok(())
}
