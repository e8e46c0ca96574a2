use super::*;
use crate::{
    model::group::GroupDto,
    server::controller::{
        group::{create_group, update_group},
        FacultyIdParam,
    },
};

fn dto(name: &str) -> GroupDto {
    GroupDto {
        id: 0,
        name: name.to_string(),
        faculty_id: 0,
    }
}

/// Tests that `faculty-id` is attached to the created group.
///
/// Expected: 200 OK with the group in the given faculty
#[tokio::test]
async fn create_attaches_faculty() -> TestResult {
    let test = TestBuilder::new().with_university_tables().build().await?;
    let db = test.db.as_ref().unwrap();
    let state = AppState::new(db.clone(), false);
    let faculty = factory::create_faculty(db).await?;

    let response = create_group(
        State(state),
        QueryParams(FacultyIdParam {
            faculty_id: faculty.id,
        }),
        JsonBody(Some(dto("CS-101"))),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let created: GroupDto = body(response).await?;
    assert_eq!(created.faculty_id, faculty.id);

    Ok(())
}

/// Tests creating a group in an unknown faculty.
///
/// Expected: 404 Not Found
#[tokio::test]
async fn create_with_unknown_faculty_is_not_found() -> TestResult {
    let test = TestBuilder::new().with_university_tables().build().await?;
    let state = AppState::new(test.db.clone().unwrap(), false);

    let response = create_group(
        State(state),
        QueryParams(FacultyIdParam { faculty_id: 999 }),
        JsonBody(Some(dto("CS-101"))),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests that the faculty lookup runs before the body check.
///
/// Expected: 404 for an unknown faculty even with a `null` body; 400 once the
/// faculty exists
#[tokio::test]
async fn faculty_lookup_precedes_body_check() -> TestResult {
    let test = TestBuilder::new().with_university_tables().build().await?;
    let db = test.db.as_ref().unwrap();
    let state = AppState::new(db.clone(), false);
    let faculty = factory::create_faculty(db).await?;

    let unknown = update_group(
        State(state.clone()),
        PathParam(1),
        QueryParams(FacultyIdParam { faculty_id: 999 }),
        JsonBody(None),
    )
    .await
    .into_response();
    let known = update_group(
        State(state),
        PathParam(1),
        QueryParams(FacultyIdParam {
            faculty_id: faculty.id,
        }),
        JsonBody(None),
    )
    .await
    .into_response();

    assert_eq!(unknown.status(), StatusCode::NOT_FOUND);
    assert_eq!(known.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
