use crate::server::{
    data::{student::StudentRepository, Repository},
    error::data::DataError,
};
use test_utils::{builder::TestBuilder, factory};

use super::TestResult;

/// Tests reading a student with its group.
///
/// Expected: Ok with the group reference of the stored row
#[tokio::test]
async fn finds_student_with_group() -> TestResult {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, group) = factory::helpers::create_group_with_faculty(db).await?;
    let stored = factory::create_student(db, group.id).await?;

    let found = StudentRepository::new(db).find_by_id(stored.id).await?;

    assert_eq!(found.person.first_name, stored.first_name);
    assert_eq!(found.group_id, group.id);

    Ok(())
}

/// Tests moving a student to another group.
///
/// Expected: Ok with the new group reference
#[tokio::test]
async fn moves_student_to_other_group() -> TestResult {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (faculty, group) = factory::helpers::create_group_with_faculty(db).await?;
    let other = factory::create_group(db, faculty.id).await?;
    let stored = factory::create_student(db, group.id).await?;
    let repo = StudentRepository::new(db);

    let mut student = repo.find_by_id(stored.id).await?;
    student.group_id = other.id;

    let updated = repo.update(student).await?;

    assert_eq!(updated.group_id, other.id);

    Ok(())
}

/// Tests that student lookups never see lecturers.
///
/// Expected: Err(DataError::NotFound) for the lecturer id
#[tokio::test]
async fn ignores_lecturers() -> TestResult {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lecturer = factory::create_lecturer(db).await?;
    let repo = StudentRepository::new(db);

    assert!(repo.find_all().await?.is_empty());
    assert!(matches!(
        repo.find_by_id(lecturer.id).await,
        Err(DataError::NotFound {
            entity: "Student",
            ..
        })
    ));

    Ok(())
}

/// Tests deleting a student.
///
/// Expected: Ok, and a second delete reports NotFound
#[tokio::test]
async fn deletes_student_once() -> TestResult {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, group) = factory::helpers::create_group_with_faculty(db).await?;
    let stored = factory::create_student(db, group.id).await?;
    let repo = StudentRepository::new(db);

    repo.delete(stored.id).await?;

    assert!(matches!(
        repo.delete(stored.id).await,
        Err(DataError::NotFound { .. })
    ));

    Ok(())
}
