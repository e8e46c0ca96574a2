use super::*;

/// Tests listing faculties of an empty store.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_list() -> TestResult {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let faculties = FacultyRepository::new(db).find_all().await?;

    assert!(faculties.is_empty());

    Ok(())
}

/// Tests listing several faculties.
///
/// Expected: Ok with all faculties ordered by id
#[tokio::test]
async fn returns_all_ordered_by_id() -> TestResult {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_faculty(db).await?;
    let second = factory::create_faculty(db).await?;
    let third = factory::create_faculty(db).await?;

    let ids: Vec<i32> = FacultyRepository::new(db)
        .find_all()
        .await?
        .into_iter()
        .map(|f| f.id)
        .collect();

    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}
