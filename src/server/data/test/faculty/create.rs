use super::*;

/// Tests creating the first faculty in an empty store.
///
/// Verifies that the store assigns id 1 and returns the stored name.
///
/// Expected: Ok with Faculty { id: 1, name: "Test Faculty" }
#[tokio::test]
async fn assigns_first_id() -> TestResult {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FacultyRepository::new(db);
    let created = repo.create(faculty("Test Faculty")).await?;

    assert_eq!(
        created,
        Faculty {
            id: 1,
            name: "Test Faculty".to_string()
        }
    );

    Ok(())
}

/// Tests that consecutive creates get increasing ids.
///
/// Expected: Ok with ids 1 and 2
#[tokio::test]
async fn assigns_increasing_ids() -> TestResult {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FacultyRepository::new(db);
    let first = repo.create(faculty("Physics")).await?;
    let second = repo.create(faculty("Chemistry")).await?;

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);

    Ok(())
}

/// Tests creating a faculty when its table does not exist.
///
/// Verifies that a failing store is reported as a storage failure rather than
/// as a missing record.
///
/// Expected: Err(DataError::Storage) for the create operation
#[tokio::test]
async fn fails_without_table() -> TestResult {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = FacultyRepository::new(db).create(faculty("Physics")).await;

    assert!(matches!(
        result,
        Err(DataError::Storage {
            entity: "Faculty",
            operation: "create",
            ..
        })
    ));

    Ok(())
}
