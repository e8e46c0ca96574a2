use crate::server::{
    data::{group::GroupRepository, Repository},
    error::data::DataError,
    model::group::Group,
};
use test_utils::{builder::TestBuilder, factory};

use super::TestResult;

/// Tests creating a group inside a faculty.
///
/// Expected: Ok with the assigned id and the faculty reference kept
#[tokio::test]
async fn creates_group() -> TestResult {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let faculty = factory::create_faculty(db).await?;

    let created = GroupRepository::new(db)
        .create(Group {
            id: 0,
            name: "KN-21".to_string(),
            faculty_id: faculty.id,
        })
        .await?;

    assert!(created.id >= 1);
    assert_eq!(created.name, "KN-21");
    assert_eq!(created.faculty_id, faculty.id);

    Ok(())
}

/// Tests creating a group for a faculty that does not exist.
///
/// Expected: Err(DataError::Storage) from the foreign key constraint
#[tokio::test]
async fn rejects_unknown_faculty() -> TestResult {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GroupRepository::new(db)
        .create(Group {
            id: 0,
            name: "KN-21".to_string(),
            faculty_id: 99,
        })
        .await;

    assert!(matches!(result, Err(DataError::Storage { .. })));

    Ok(())
}

/// Tests moving a group to another faculty.
///
/// Expected: Ok with the new name and faculty
#[tokio::test]
async fn updates_name_and_faculty() -> TestResult {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, group) = factory::helpers::create_group_with_faculty(db).await?;
    let other = factory::create_faculty(db).await?;

    let updated = GroupRepository::new(db)
        .update(Group {
            id: group.id,
            name: "KN-22".to_string(),
            faculty_id: other.id,
        })
        .await?;

    assert_eq!(updated.id, group.id);
    assert_eq!(updated.name, "KN-22");
    assert_eq!(updated.faculty_id, other.id);

    Ok(())
}

/// Tests deleting a group that still has lessons.
///
/// Lessons cascade with their group, so the delete succeeds and the lesson is gone.
///
/// Expected: Ok and no lessons left
#[tokio::test]
async fn delete_cascades_to_lessons() -> TestResult {
    use sea_orm::{EntityTrait, PaginatorTrait};

    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (group, _, _, _) = factory::helpers::create_lesson_with_dependencies(db).await?;

    GroupRepository::new(db).delete(group.id).await?;

    assert_eq!(entity::prelude::Lesson::find().count(db).await?, 0);

    Ok(())
}
