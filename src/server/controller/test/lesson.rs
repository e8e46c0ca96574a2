use super::*;
use crate::{
    model::lesson::{DayOfWeekDto, LessonDto},
    server::controller::lesson::{create_lesson, LessonRefsParams},
};
use test_utils::factory::lesson_time::LessonTimeFactory;

fn dto(day: DayOfWeekDto) -> LessonDto {
    LessonDto {
        id: 0,
        name: "Databases".to_string(),
        audience: "C-310".to_string(),
        day,
        lesson_time_id: 0,
        lecturer_id: 0,
        group_id: 0,
    }
}

/// Tests that the referenced records are attached to the created lesson.
///
/// Expected: 200 OK with the lesson time, lecturer and group ids of the query
#[tokio::test]
async fn create_attaches_references() -> TestResult {
    let test = TestBuilder::new().with_university_tables().build().await?;
    let db = test.db.as_ref().unwrap();
    let state = AppState::new(db.clone(), false);
    let (_, group) = factory::helpers::create_group_with_faculty(db).await?;
    let lecturer = factory::create_lecturer(db).await?;
    let slot = factory::create_lesson_time(db).await?;

    let refs = LessonRefsParams {
        lesson_time_id: slot.id,
        lecturer_id: lecturer.id,
        group_id: group.id,
    };
    let response = create_lesson(State(state), QueryParams(refs), JsonBody(Some(dto(DayOfWeekDto::Friday))))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let created: LessonDto = body(response).await?;
    assert_eq!(created.lesson_time_id, slot.id);
    assert_eq!(created.lecturer_id, lecturer.id);
    assert_eq!(created.group_id, group.id);
    assert_eq!(created.day, DayOfWeekDto::Friday);

    Ok(())
}

/// Tests that a double-booked group is rejected when slot checking is enabled.
///
/// Expected: 400 Bad Request
#[tokio::test]
async fn strict_slots_reject_double_booking() -> TestResult {
    let test = TestBuilder::new().with_university_tables().build().await?;
    let db = test.db.as_ref().unwrap();
    let state = AppState::new(db.clone(), true);
    let (group, _, _, _) = factory::helpers::create_lesson_with_dependencies(db).await?;
    let lecturer = factory::create_lecturer(db).await?;
    let slot = LessonTimeFactory::new(db)
        .hours(9, 30, 11, 0)
        .build()
        .await?;

    let refs = LessonRefsParams {
        lesson_time_id: slot.id,
        lecturer_id: lecturer.id,
        group_id: group.id,
    };
    let response = create_lesson(State(state), QueryParams(refs), JsonBody(Some(dto(DayOfWeekDto::Monday))))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
