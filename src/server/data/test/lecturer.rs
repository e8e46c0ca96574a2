use entity::sea_orm_active_enums::Gender;

use crate::server::{
    data::{lecturer::LecturerRepository, Repository},
    error::data::DataError,
    model::person::{Lecturer, Person},
};
use test_utils::{builder::TestBuilder, factory};

use super::TestResult;

fn lecturer(first_name: &str) -> Lecturer {
    Lecturer {
        person: Person {
            id: 0,
            first_name: first_name.to_string(),
            last_name: "Lovelace".to_string(),
            gender: Gender::Female,
            phone_number: "+380501112233".to_string(),
            email: "ada@university.edu".to_string(),
        },
    }
}

/// Tests creating a lecturer.
///
/// Expected: Ok with the assigned id and every field stored
#[tokio::test]
async fn creates_lecturer() -> TestResult {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = LecturerRepository::new(db).create(lecturer("Ada")).await?;

    let mut expected = lecturer("Ada");
    expected.person.id = created.person.id;

    assert!(created.person.id >= 1);
    assert_eq!(created, expected);

    Ok(())
}

/// Tests that lecturer lookups never see students.
///
/// A student and a lecturer share the persons table; the student id must not
/// resolve to a lecturer.
///
/// Expected: Err(DataError::NotFound) for the student id, lists contain lecturers only
#[tokio::test]
async fn ignores_students() -> TestResult {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, group) = factory::helpers::create_group_with_faculty(db).await?;
    let student = factory::create_student(db, group.id).await?;
    let lecturer = factory::create_lecturer(db).await?;
    let repo = LecturerRepository::new(db);

    let all = repo.find_all().await?;

    assert!(matches!(
        repo.find_by_id(student.id).await,
        Err(DataError::NotFound {
            entity: "Lecturer",
            ..
        })
    ));
    assert!(matches!(
        repo.delete(student.id).await,
        Err(DataError::NotFound { .. })
    ));
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].person.id, lecturer.id);

    Ok(())
}

/// Tests updating a lecturer's contact data.
///
/// Expected: Ok with the new phone number and email
#[tokio::test]
async fn updates_contact_data() -> TestResult {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_lecturer(db).await?;
    let repo = LecturerRepository::new(db);

    let mut changed = repo.find_by_id(stored.id).await?;
    changed.person.phone_number = "+380679998877".to_string();
    changed.person.email = "new@university.edu".to_string();

    let updated = repo.update(changed.clone()).await?;

    assert_eq!(updated, changed);

    Ok(())
}
