use chrono::NaiveTime;
use entity::sea_orm_active_enums::{DayOfWeek, Gender};

use super::*;
use crate::server::{
    data::Repository,
    model::{
        faculty::Faculty,
        group::Group,
        lesson::Lesson,
        lesson_time::LessonTime,
        person::{Lecturer, Person, Student},
        DomainModel,
    },
    service::{
        faculty::FacultyService,
        group::GroupService,
        lecturer::LecturerService,
        lesson::LessonService,
        lesson_time::LessonTimeService,
        pipeline::Pipeline,
        student::StudentService,
        validation::Validator,
    },
};

/// Runs every id precondition of one entity kind and expects each to fail with
/// `InvalidArgument`.
///
/// `stored` is a valid model with a non-zero id. The database has no tables, so an
/// operation that reached the store would fail with a storage failure instead.
async fn assert_rejects_bad_ids<R, V>(service: Pipeline<R, V>, stored: R::Model)
where
    R: Repository,
    V: Validator<R::Model>,
{
    let kind = R::Model::KIND;
    let mut unstored = stored.clone();
    unstored.set_id(0);
    let mut negative = stored.clone();
    negative.set_id(-3);

    assert!(
        matches!(service.create(Some(stored)).await, Err(AppError::InvalidArgument(_))),
        "{kind}: create with an id"
    );
    assert!(
        matches!(service.create(None).await, Err(AppError::InvalidArgument(_))),
        "{kind}: create without a model"
    );
    assert!(
        matches!(service.update(Some(unstored)).await, Err(AppError::InvalidArgument(_))),
        "{kind}: update with id 0"
    );
    assert!(
        matches!(service.update(Some(negative)).await, Err(AppError::InvalidArgument(_))),
        "{kind}: update with a negative id"
    );
    assert!(
        matches!(service.get_by_id(0).await, Err(AppError::InvalidArgument(_))),
        "{kind}: get id 0"
    );
    assert!(
        matches!(service.delete_by_id(-14).await, Err(AppError::InvalidArgument(_))),
        "{kind}: delete id -14"
    );
}

fn person() -> Person {
    Person {
        id: 5,
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        gender: Gender::Female,
        phone_number: "+380501234567".to_string(),
        email: "ada@university.edu".to_string(),
    }
}

/// Tests the id preconditions of every entity kind without touching the store.
///
/// Expected: Err(InvalidArgument) for a create with an id, a missing model, an
/// update with a non-positive id, get-by-id(0) and delete-by-id(-14)
#[tokio::test]
async fn every_entity_kind_rejects_bad_ids() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert_rejects_bad_ids(
        FacultyService::new(db),
        Faculty {
            id: 5,
            name: "Physics".to_string(),
        },
    )
    .await;
    assert_rejects_bad_ids(
        GroupService::new(db),
        Group {
            id: 5,
            name: "PH-21".to_string(),
            faculty_id: 1,
        },
    )
    .await;
    assert_rejects_bad_ids(LecturerService::new(db), Lecturer { person: person() }).await;
    assert_rejects_bad_ids(
        StudentService::new(db),
        Student {
            person: person(),
            group_id: 1,
        },
    )
    .await;
    assert_rejects_bad_ids(
        LessonTimeService::new(db),
        LessonTime {
            id: 5,
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
        },
    )
    .await;
    for strict_slots in [false, true] {
        assert_rejects_bad_ids(
            LessonService::new(db, strict_slots),
            Lesson {
                id: 5,
                name: "Optics".to_string(),
                audience: "B-204".to_string(),
                day: DayOfWeek::Tuesday,
                lesson_time_id: 1,
                lecturer_id: 1,
                group_id: 1,
            },
        )
        .await;
    }

    Ok(())
}

/// Tests that a rejected delete leaves stored records in place.
///
/// Expected: Err(InvalidArgument) and the stored lesson still readable
#[tokio::test]
async fn rejected_delete_keeps_store_unchanged() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, _, _, lesson) = factory::helpers::create_lesson_with_dependencies(db).await?;
    let service = LessonService::new(db, false);

    let result = service.delete_by_id(-14).await;

    assert!(matches!(result, Err(AppError::InvalidArgument(_))));
    assert_eq!(service.get_all().await?.len(), 1);
    assert_eq!(service.get_by_id(lesson.id).await?.id, lesson.id);

    Ok(())
}
