use super::*;

/// Tests finding an existing faculty.
///
/// Expected: Ok with the stored faculty
#[tokio::test]
async fn finds_existing_faculty() -> TestResult {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::faculty::FacultyFactory::new(db)
        .name("Mathematics")
        .build()
        .await?;

    let found = FacultyRepository::new(db).find_by_id(stored.id).await?;

    assert_eq!(found.id, stored.id);
    assert_eq!(found.name, "Mathematics");

    Ok(())
}

/// Tests finding a faculty id that was never stored.
///
/// Expected: Err(DataError::NotFound) naming the kind and id
#[tokio::test]
async fn returns_not_found_for_missing_id() -> TestResult {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = FacultyRepository::new(db).find_by_id(42).await;

    assert!(matches!(
        result,
        Err(DataError::NotFound {
            entity: "Faculty",
            id: 42
        })
    ));

    Ok(())
}
