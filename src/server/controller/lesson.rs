use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        lesson::LessonDto,
    },
    server::{
        controller::{
            deleted,
            extract::{JsonBody, PathParam, QueryParams},
        },
        error::AppError,
        model::{lesson::Lesson, DomainModel},
        service::{
            group::GroupService, lecturer::LecturerService, lesson::LessonService,
            lesson_time::LessonTimeService,
        },
        state::AppState,
    },
};

/// Tag for grouping lesson endpoints in OpenAPI documentation
pub static LESSON_TAG: &str = "lessons";

/// Query parameters naming the records a lesson references.
#[derive(Deserialize, Debug)]
pub struct LessonRefsParams {
    #[serde(rename = "lesson-time-id")]
    pub lesson_time_id: i32,
    #[serde(rename = "lecturer-id")]
    pub lecturer_id: i32,
    #[serde(rename = "group-id")]
    pub group_id: i32,
}

/// Resolves the lesson time, lecturer and group parameters, in that order, and
/// attaches them to the lesson.
async fn with_refs(
    state: &AppState,
    refs: LessonRefsParams,
    payload: Option<LessonDto>,
) -> Result<Option<Lesson>, AppError> {
    let lesson_time = LessonTimeService::new(&state.db)
        .get_by_id(refs.lesson_time_id)
        .await?;
    let lecturer = LecturerService::new(&state.db)
        .get_by_id(refs.lecturer_id)
        .await?;
    let group = GroupService::new(&state.db).get_by_id(refs.group_id).await?;

    Ok(payload.map(|dto| Lesson {
        lesson_time_id: lesson_time.id,
        lecturer_id: lecturer.id(),
        group_id: group.id,
        ..Lesson::from_dto(dto)
    }))
}

#[utoipa::path(
    get,
    path = "/lessons",
    tag = LESSON_TAG,
    responses(
        (status = 200, description = "Successfully retrieved lessons", body = Vec<LessonDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lessons(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let lessons = LessonService::new(&state.db, state.strict_lesson_slots)
        .get_all()
        .await?;
    let dtos: Vec<LessonDto> = lessons.into_iter().map(Lesson::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/lessons/{id}",
    tag = LESSON_TAG,
    params(
        ("id" = i32, Path, description = "Lesson id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved lesson", body = LessonDto),
        (status = 400, description = "Id is not positive", body = ErrorDto),
        (status = 404, description = "Lesson not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lesson(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let lesson = LessonService::new(&state.db, state.strict_lesson_slots)
        .get_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(lesson.into_dto())))
}

/// Create a weekly lesson.
///
/// The lesson time, lecturer and group are given as query parameters and must
/// exist. With strict lesson slots enabled, a lesson overlapping another lesson of
/// the same lecturer or group on the same day is rejected.
///
/// # Returns
/// - `200 OK` - The stored lesson
/// - `400 Bad Request` - Missing body, id set, invalid fields or slot already taken
/// - `404 Not Found` - Lesson time, lecturer or group not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/lessons",
    tag = LESSON_TAG,
    params(
        ("lesson-time-id" = i32, Query, description = "Time slot of the lesson"),
        ("lecturer-id" = i32, Query, description = "Lecturer teaching the lesson"),
        ("group-id" = i32, Query, description = "Group attending the lesson")
    ),
    request_body = LessonDto,
    responses(
        (status = 200, description = "Successfully created lesson", body = LessonDto),
        (status = 400, description = "Invalid lesson data", body = ErrorDto),
        (status = 404, description = "Referenced record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_lesson(
    State(state): State<AppState>,
    QueryParams(refs): QueryParams<LessonRefsParams>,
    JsonBody(payload): JsonBody<Option<LessonDto>>,
) -> Result<impl IntoResponse, AppError> {
    let lesson = with_refs(&state, refs, payload).await?;

    let lesson = LessonService::new(&state.db, state.strict_lesson_slots)
        .create(lesson)
        .await?;

    Ok((StatusCode::OK, Json(lesson.into_dto())))
}

/// Update a weekly lesson. The path id replaces any id in the body.
#[utoipa::path(
    patch,
    path = "/lessons/{id}",
    tag = LESSON_TAG,
    params(
        ("id" = i32, Path, description = "Lesson id"),
        ("lesson-time-id" = i32, Query, description = "Time slot of the lesson"),
        ("lecturer-id" = i32, Query, description = "Lecturer teaching the lesson"),
        ("group-id" = i32, Query, description = "Group attending the lesson")
    ),
    request_body = LessonDto,
    responses(
        (status = 200, description = "Successfully updated lesson", body = LessonDto),
        (status = 400, description = "Invalid lesson data", body = ErrorDto),
        (status = 404, description = "Lesson or referenced record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_lesson(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    QueryParams(refs): QueryParams<LessonRefsParams>,
    JsonBody(payload): JsonBody<Option<LessonDto>>,
) -> Result<impl IntoResponse, AppError> {
    let lesson = with_refs(&state, refs, payload).await?.map(|mut lesson| {
        lesson.set_id(id);
        lesson
    });

    let lesson = LessonService::new(&state.db, state.strict_lesson_slots)
        .update(lesson)
        .await?;

    Ok((StatusCode::OK, Json(lesson.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/lessons/{id}",
    tag = LESSON_TAG,
    params(
        ("id" = i32, Path, description = "Lesson id")
    ),
    responses(
        (status = 200, description = "Successfully deleted lesson", body = MessageDto),
        (status = 400, description = "Id is not positive", body = ErrorDto),
        (status = 404, description = "Lesson not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_lesson(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    LessonService::new(&state.db, state.strict_lesson_slots)
        .delete_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(deleted(Lesson::KIND, id))))
}
